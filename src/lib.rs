//! KISS64 pseudo-random number generation for multi-threaded programs
//!
//! This crate provides fast, statistically strong 64-bit random values to
//! any number of threads at once. Each thread owns an independent generator
//! that is created and seeded lazily on its first draw, so concurrent
//! threads never contend on a lock or share state.
//!
//! The generator is **not cryptographically secure**. It is meant for
//! simulation, sampling, randomized algorithms and similar workloads.
//!
//! # Module overview
//!
//! - `kiss`
//!   The KISS64 generator itself: the [`Seed`] state, the step function
//!   combining a linear congruential, a xorshift and two multiply-with-carry
//!   generators, and unbiased range sampling by rejection. Pure arithmetic,
//!   usable directly on an owned state.
//!
//! - `seeder`
//!   Seeding policy. The default [`OsSeeder`] draws from operating system
//!   entropy and steers clear of the generator's fixed points; any
//!   `Fn() -> Seed` closure can replace it for reproducible runs.
//!
//! - thread surface
//!   [`rand`], [`uniform`] and [`reseed`] operate on the calling thread's
//!   generator, with `try_*` twins that return errors instead of aborting.
//!
//! Internally, an OS layer wraps the platform entropy APIs and a store binds
//! one generator state to each thread, releasing it when the thread exits.
//!
//! # Example
//!
//! ```rust
//! let roll = kiss64::uniform(6) + 1;
//! assert!((1..=6).contains(&roll));
//!
//! let word = kiss64::rand();
//! # let _ = word;
//! ```

mod error;
mod os;
mod store;
mod thread;

pub mod kiss;
pub mod seeder;

pub use error::Error;
pub use kiss::Seed;
pub use os::DEV_RANDOM;
pub use seeder::{EntropySource, OsSeeder, Seeder};
pub use thread::{
    current_seed, init, init_thread, init_with, live_seeds, rand, reseed, try_rand, try_reseed,
    try_uniform, uniform,
};
