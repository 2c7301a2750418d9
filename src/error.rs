//! Error types.

use std::io;

use thiserror::Error;

/// Errors produced by the generator.
///
/// At the aborting entry points ([`rand`](crate::rand),
/// [`uniform`](crate::uniform), [`reseed`](crate::reseed)) every variant is
/// fatal. The `try_*` entry points hand them back to the caller instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The calling thread's generator state could not be obtained, for
    /// instance because the thread is already tearing down its locals.
    #[error("per-thread generator state could not be allocated")]
    Allocation,

    /// `uniform` was asked for a value in an empty range.
    #[error("invalid argument: upper bound must be greater than zero")]
    InvalidArgument,

    /// The entropy source could not be opened or did not supply enough bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] io::Error),

    /// A custom seeder produced a seed on one of the generator's fixed points.
    #[error("seeder produced a degenerate seed (zero xorshift word or zero MWC pair)")]
    InvalidSeed,

    /// The seeder drew from the generator of the thread it was seeding.
    #[error("seeder drew from the generator it is seeding")]
    ReentrantSeeding,

    /// A seeder was already installed for this process.
    #[error("generator already initialized")]
    AlreadyInitialized,
}
