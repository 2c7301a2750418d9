//! Per-thread seed store.
//!
//! Every thread that touches the generator owns exactly one [`Slot`]: its
//! seed plus the epoch flag that drives lazy seeding. Slots live in
//! thread-local storage, so the generation path never synchronizes with
//! other threads. The slot is created on the thread's first call and
//! released by the thread-local destructor when the thread exits.
//!
//! A process-wide counter tracks how many slots are currently alive. It is
//! touched only when a slot is created or released.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::error::Error;
use crate::kiss::Seed;

/// Seeding lifecycle of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Epoch {
    /// The seed fields are placeholders; the next draw must seed first.
    Unseeded,
    /// The seeder is running for this slot. A draw that finds this state
    /// came from inside the seeder.
    Seeding,
    /// The seed fields hold a live generator state.
    Seeded,
}

/// One thread's generator state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Slot {
    pub(crate) seed: Seed,
    pub(crate) epoch: Epoch,
}

impl Slot {
    const fn fresh() -> Self {
        Self {
            seed: Seed::ZERO,
            epoch: Epoch::Unseeded,
        }
    }
}

struct ThreadSeed {
    slot: Cell<Option<Slot>>,
}

impl Drop for ThreadSeed {
    fn drop(&mut self) {
        if self.slot.get_mut().take().is_some() {
            LIVE.fetch_sub(1, Ordering::Relaxed);
            debug!("generator state released");
        }
    }
}

thread_local! {
    static THREAD_SEED: ThreadSeed = const {
        ThreadSeed {
            slot: Cell::new(None),
        }
    };
}

static LIVE: AtomicUsize = AtomicUsize::new(0);

/// Resolves the calling thread's slot, allocating a zeroed, unseeded one on
/// first use, runs `f` on it and stores the result back.
///
/// `f` works on a copy that is written back when it returns, so it must not
/// call back into the store; the seeder is run between two calls instead.
///
/// # Errors
/// [`Error::Allocation`] if the thread's local storage is no longer
/// available (the thread is being torn down). Errors from `f` are passed
/// through after the slot is written back.
pub(crate) fn with_current<R>(
    f: impl FnOnce(&mut Slot) -> Result<R, Error>,
) -> Result<R, Error> {
    THREAD_SEED
        .try_with(|local| {
            let mut slot = local.slot.get().unwrap_or_else(|| {
                let slot = Slot::fresh();
                local.slot.set(Some(slot));
                LIVE.fetch_add(1, Ordering::Relaxed);
                debug!("generator state allocated");
                slot
            });

            let out = f(&mut slot);
            local.slot.set(Some(slot));
            out
        })
        .map_err(|_| Error::Allocation)?
}

/// Restarts the calling thread's seeding epoch. The seed fields are left
/// as they are until the next draw overwrites them.
pub(crate) fn mark_unseeded() -> Result<(), Error> {
    with_current(|slot| {
        slot.epoch = Epoch::Unseeded;
        Ok(())
    })
}

/// The calling thread's slot, without allocating one.
pub(crate) fn peek() -> Result<Option<Slot>, Error> {
    THREAD_SEED
        .try_with(|local| local.slot.get())
        .map_err(|_| Error::Allocation)
}

/// Number of slots currently allocated across all threads.
pub(crate) fn live() -> usize {
    LIVE.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn slot_is_allocated_on_first_use() {
        thread::spawn(|| {
            assert!(peek().unwrap().is_none());

            with_current(|slot| {
                assert_eq!(slot.epoch, Epoch::Unseeded);
                assert_eq!(slot.seed, Seed::ZERO);
                Ok(())
            })
            .unwrap();

            assert!(peek().unwrap().is_some());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn updates_are_kept_between_calls() {
        thread::spawn(|| {
            with_current(|slot| {
                slot.seed.x = 42;
                slot.epoch = Epoch::Seeded;
                Ok(())
            })
            .unwrap();

            let slot = peek().unwrap().unwrap();
            assert_eq!(slot.seed.x, 42);
            assert_eq!(slot.epoch, Epoch::Seeded);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn mark_unseeded_keeps_fields() {
        thread::spawn(|| {
            with_current(|slot| {
                slot.seed.y = 7;
                slot.epoch = Epoch::Seeded;
                Ok(())
            })
            .unwrap();

            mark_unseeded().unwrap();

            let slot = peek().unwrap().unwrap();
            assert_eq!(slot.epoch, Epoch::Unseeded);
            assert_eq!(slot.seed.y, 7);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn errors_still_write_back() {
        thread::spawn(|| {
            let result: Result<(), Error> = with_current(|slot| {
                slot.seed.x = 9;
                Err(Error::InvalidArgument)
            });

            assert!(matches!(result, Err(Error::InvalidArgument)));
            assert_eq!(peek().unwrap().unwrap().seed.x, 9);
        })
        .join()
        .unwrap();
    }
}
