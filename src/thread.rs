//! Per-thread generator surface.
//!
//! These functions draw from the calling thread's own generator. The first
//! call on a thread allocates its state and seeds it through the installed
//! [`Seeder`]; later calls are pure arithmetic.
//!
//! Two flavours are provided:
//!
//! - [`rand`], [`uniform`], [`reseed`] abort the process on any error.
//!   A generator that cannot obtain state or entropy has no meaningful
//!   value to return, and a zero-sized range is a caller bug.
//! - [`try_rand`], [`try_uniform`], [`try_reseed`] return the [`Error`]
//!   instead.

use tracing::{error, trace};

use crate::error::Error;
use crate::kiss::Seed;
use crate::seeder::{self, OsSeeder, Seeder};
use crate::store::{self, Epoch, Slot};

/// Installs the default operating system seeder and seeds the calling
/// thread.
///
/// Calling this is optional: without it the default seeder is installed on
/// first use.
///
/// # Errors
/// [`Error::AlreadyInitialized`] if a seeder is already in place, including
/// the default one latched by an earlier draw. Seeding errors of the
/// calling thread are returned as well.
pub fn init() -> Result<(), Error> {
    init_with(OsSeeder::new())
}

/// Installs `seeder` for every thread's first seeding and every reseed, and
/// seeds the calling thread with it.
///
/// # Errors
/// See [`init`].
///
/// # Example
///
/// ```rust,no_run
/// use kiss64::Seed;
///
/// kiss64::init_with(|| Seed::new(1, 1, 6_543_217, 43_219_876, 1_732_654, 21_987_643)).unwrap();
///
/// assert_eq!(kiss64::rand(), 11_210_165_191_501_945_096);
/// ```
pub fn init_with<S: Seeder + 'static>(seeder: S) -> Result<(), Error> {
    seeder::install(Box::new(seeder))?;
    init_thread()
}

/// Allocates and seeds the calling thread's state now rather than on its
/// first draw.
///
/// Has no effect on a thread that is already seeded.
pub fn init_thread() -> Result<(), Error> {
    with_seeded(|_| Ok(()))
}

/// Returns the next 64-bit value from the calling thread's generator.
///
/// Aborts the process if the thread's state or entropy is unavailable.
pub fn rand() -> u64 {
    try_rand().unwrap_or_else(|err| fatal(err))
}

/// Fallible form of [`rand`].
pub fn try_rand() -> Result<u64, Error> {
    with_seeded(|seed| Ok(seed.next_u64()))
}

/// Returns a value uniformly distributed over `[0, upper_bound)`.
///
/// Aborts the process if `upper_bound` is zero, or if the thread's state or
/// entropy is unavailable.
pub fn uniform(upper_bound: u64) -> u64 {
    try_uniform(upper_bound).unwrap_or_else(|err| fatal(err))
}

/// Fallible form of [`uniform`].
///
/// # Errors
/// [`Error::InvalidArgument`] if `upper_bound` is zero. The bound is
/// checked before any seeding takes place.
pub fn try_uniform(upper_bound: u64) -> Result<u64, Error> {
    if upper_bound == 0 {
        return Err(Error::InvalidArgument);
    }

    with_seeded(|seed| seed.uniform(upper_bound))
}

/// Discards the calling thread's seed; the next draw seeds afresh through
/// the installed seeder.
///
/// Aborts the process if the thread's state is unavailable.
pub fn reseed() {
    try_reseed().unwrap_or_else(|err| fatal(err))
}

/// Fallible form of [`reseed`].
pub fn try_reseed() -> Result<(), Error> {
    store::mark_unseeded()?;
    trace!("reseed requested");
    Ok(())
}

/// Snapshot of the calling thread's generator state.
///
/// `Ok(None)` if the thread has not drawn yet, or has requested a reseed
/// that has not taken effect. The snapshot is a copy: advancing it does not
/// affect the thread's sequence.
///
/// # Errors
/// [`Error::Allocation`] if the thread's local storage is already torn down.
pub fn current_seed() -> Result<Option<Seed>, Error> {
    Ok(match store::peek()? {
        Some(Slot {
            seed,
            epoch: Epoch::Seeded,
        }) => Some(seed),
        _ => None,
    })
}

/// Number of threads currently holding generator state.
pub fn live_seeds() -> usize {
    store::live()
}

/// Runs `f` on the calling thread's seed, seeding it first if its epoch
/// was restarted.
///
/// The seeder runs with the slot marked [`Epoch::Seeding`] and outside any
/// store access, so a seeder that draws from this thread's generator gets
/// [`Error::ReentrantSeeding`] rather than recursing. A failed seeding
/// leaves the slot unseeded for the next attempt; a panicking seeder leaves
/// it in `Seeding` until [`reseed`] restarts the epoch.
fn with_seeded<R>(mut f: impl FnMut(&mut Seed) -> Result<R, Error>) -> Result<R, Error> {
    let drawn = store::with_current(|slot| match slot.epoch {
        Epoch::Seeded => f(&mut slot.seed).map(Some),
        Epoch::Seeding => Err(Error::ReentrantSeeding),
        Epoch::Unseeded => {
            slot.epoch = Epoch::Seeding;
            Ok(None)
        }
    })?;

    if let Some(out) = drawn {
        return Ok(out);
    }

    let fresh = seeder::fresh_seed();

    store::with_current(|slot| match fresh {
        Ok(seed) => {
            slot.seed = seed;
            slot.epoch = Epoch::Seeded;
            trace!("generator state seeded");
            f(&mut slot.seed)
        }
        Err(err) => {
            slot.epoch = Epoch::Unseeded;
            Err(err)
        }
    })
}

fn fatal(err: Error) -> ! {
    error!(%err, "unrecoverable generator error, aborting");
    eprintln!("kiss64: {err}");
    std::process::abort()
}
