#![cfg(unix)]

use std::env;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Output};

use kiss64::Seed;

const CASE: &str = "KISS64_ABORT_CASE";
const SIGABRT: i32 = 6;

fn run_case(case: &str) -> Output {
    Command::new(env::current_exe().unwrap())
        .args(["--exact", "test_abort_case", "--nocapture", "--test-threads=1"])
        .env(CASE, case)
        .output()
        .unwrap()
}

/// Runs the fatal call named by the environment, if any. Only does work in
/// the child processes spawned below.
#[test]
fn test_abort_case() {
    match env::var(CASE).as_deref() {
        Ok("uniform_zero") => {
            kiss64::uniform(0);
        }
        Ok("degenerate_seed") => {
            let _ = kiss64::init_with(|| Seed::ZERO);
            kiss64::rand();
        }
        _ => {}
    }
}

#[test]
fn test_uniform_zero_aborts() {
    let output = run_case("uniform_zero");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.signal(), Some(SIGABRT));
    assert!(stderr.contains("kiss64: invalid argument"));
}

#[test]
fn test_degenerate_seed_aborts_rand() {
    let output = run_case("degenerate_seed");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.signal(), Some(SIGABRT));
    assert!(stderr.contains("kiss64: seeder produced a degenerate seed"));
}
