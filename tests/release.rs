use std::sync::mpsc;
use std::thread;

// A single test: the live count is process-wide.
#[test]
fn test_thread_state_is_released_on_exit() {
    assert_eq!(kiss64::live_seeds(), 0);

    let (tx, rx) = mpsc::channel();
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let worker = thread::spawn(move || {
        kiss64::rand();
        tx.send(()).unwrap();
        done_rx.recv().unwrap();
    });

    rx.recv().unwrap();
    assert_eq!(kiss64::live_seeds(), 1);

    kiss64::rand();
    assert_eq!(kiss64::live_seeds(), 2);

    done_tx.send(()).unwrap();
    worker.join().unwrap();
    assert_eq!(kiss64::live_seeds(), 1);
}
