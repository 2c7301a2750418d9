use std::thread;

use kiss64::Error;

fn chi_squared(counts: &[u64], draws: u64) -> f64 {
    let expected = draws as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum()
}

fn uniform_statistic(draws: u64) -> f64 {
    let mut counts = [0u64; 100];
    for _ in 0..draws {
        counts[kiss64::uniform(100) as usize] += 1;
    }
    chi_squared(&counts, draws)
}

// 99 degrees of freedom, p = 1e-6
const LENIENT_CRITICAL: f64 = 181.0;

#[test]
fn test_threads_have_independent_sequences() {
    const DRAWS: usize = 1_000_000;

    let spawn = || {
        thread::spawn(|| {
            let head: Vec<u64> = (0..16).map(|_| kiss64::rand()).collect();
            let sum = (16..DRAWS).fold(0u64, |acc, _| acc.wrapping_add(kiss64::rand()));
            (head, sum)
        })
    };

    let a = spawn();
    let b = spawn();
    let (head_a, sum_a) = a.join().unwrap();
    let (head_b, sum_b) = b.join().unwrap();

    assert_ne!(head_a, head_b);
    assert_ne!(sum_a, sum_b);
}

#[test]
fn test_successive_draws_differ() {
    thread::spawn(|| {
        let first = kiss64::rand();
        let second = kiss64::rand();

        assert_ne!(first, second);
    })
    .join()
    .unwrap();
}

#[test]
fn test_uniform_stays_in_range() {
    thread::spawn(|| {
        for bound in [1, 2, 3, 7, 1_000, 1 << 32, 1 << 63] {
            for _ in 0..10_000 {
                assert!(kiss64::uniform(bound) < bound);
            }
        }
    })
    .join()
    .unwrap();
}

#[test]
fn test_uniform_single_element_range_is_zero() {
    for _ in 0..1_000 {
        assert_eq!(kiss64::uniform(1), 0);
    }
}

#[test]
fn test_uniform_zero_bound_is_invalid() {
    assert!(matches!(kiss64::try_uniform(0), Err(Error::InvalidArgument)));
}

#[test]
fn test_uniform_passes_chi_squared() {
    thread::spawn(|| assert!(uniform_statistic(100_000) < LENIENT_CRITICAL))
        .join()
        .unwrap();
}

#[test]
fn test_reseed_replaces_state() {
    thread::spawn(|| {
        kiss64::rand();
        let before = kiss64::current_seed().unwrap().unwrap();

        kiss64::reseed();
        assert!(kiss64::current_seed().unwrap().is_none());

        kiss64::rand();
        let after = kiss64::current_seed().unwrap().unwrap();

        let mut continued = before;
        continued.next_u64();
        assert_ne!(after, continued);

        assert!(uniform_statistic(100_000) < LENIENT_CRITICAL);
    })
    .join()
    .unwrap();
}

#[test]
fn test_current_seed_tracks_the_thread() {
    thread::spawn(|| {
        assert!(kiss64::current_seed().unwrap().is_none());

        kiss64::init_thread().unwrap();
        let mut snapshot = kiss64::current_seed().unwrap().unwrap();
        assert!(snapshot.is_valid());

        assert_eq!(snapshot.next_u64(), kiss64::rand());
        assert_eq!(kiss64::current_seed().unwrap(), Some(snapshot));
    })
    .join()
    .unwrap();
}

#[test]
fn test_init_after_first_use_is_rejected() {
    kiss64::rand();

    assert!(matches!(kiss64::init(), Err(Error::AlreadyInitialized)));
    assert!(matches!(
        kiss64::init_with(kiss64::Seed::default),
        Err(Error::AlreadyInitialized)
    ));
}
