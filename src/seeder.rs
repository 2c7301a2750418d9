//! Seeding policy.
//!
//! A [`Seeder`] produces the initial state of a thread's generator. It runs
//! the first time a thread draws a value and again on every explicit
//! [`reseed`](crate::reseed).
//!
//! The built-in [`OsSeeder`] fills every field from operating system
//! entropy and redraws any field that lands on one of the generator's fixed
//! points: a zero xorshift word, or an all-zero multiply-with-carry pair.
//! Only the offending field is redrawn.
//!
//! Any `Fn() -> Seed + Send + Sync` closure is also a seeder, which is the
//! way to obtain reproducible per-thread sequences. Custom seeds are checked
//! with [`Seed::is_valid`] but never repaired: there is no entropy to redraw
//! from, so a degenerate custom seed is an [`Error::InvalidSeed`].

use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::Error;
use crate::kiss::Seed;
use crate::os::{DEV_RANDOM, Device, sys_random};

/// Strategy producing the initial state of a thread's generator.
pub trait Seeder: Send + Sync {
    /// Produces a fresh seed.
    ///
    /// # Errors
    /// Implementations report entropy failures as
    /// [`Error::EntropyUnavailable`].
    fn seed(&self) -> Result<Seed, Error>;
}

impl<F> Seeder for F
where
    F: Fn() -> Seed + Send + Sync,
{
    fn seed(&self) -> Result<Seed, Error> {
        Ok(self())
    }
}

/// Where [`OsSeeder`] reads its entropy from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntropySource {
    /// The platform entropy API (`getrandom`, `arc4random_buf`,
    /// `BCryptGenRandom`).
    System,

    /// A random character device, read sequentially.
    Device(PathBuf),
}

impl Default for EntropySource {
    /// [`EntropySource::System`], or the device at [`DEV_RANDOM`] when the
    /// `dev-random` feature is enabled.
    fn default() -> Self {
        if cfg!(feature = "dev-random") {
            Self::Device(PathBuf::from(DEV_RANDOM))
        } else {
            Self::System
        }
    }
}

/// Default seeder backed by operating system entropy.
#[derive(Clone, Debug, Default)]
pub struct OsSeeder {
    source: EntropySource,
}

impl OsSeeder {
    /// Creates a seeder using the default [`EntropySource`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a seeder reading from the random device at `path`.
    pub fn with_device(path: impl Into<PathBuf>) -> Self {
        Self {
            source: EntropySource::Device(path.into()),
        }
    }

    /// The entropy source this seeder reads from.
    pub fn source(&self) -> &EntropySource {
        &self.source
    }
}

impl Seeder for OsSeeder {
    fn seed(&self) -> Result<Seed, Error> {
        match &self.source {
            EntropySource::System => seed_from(&mut SystemEntropy),
            EntropySource::Device(path) => seed_from(&mut Device::open(path)?),
        }
    }
}

/// Raw byte provider consumed by [`seed_from`].
pub(crate) trait Entropy {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

struct SystemEntropy;

impl Entropy for SystemEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        sys_random(buf)
    }
}

impl Entropy for Device {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        Device::fill(self, buf)
    }
}

/// Builds a valid seed from raw entropy, redrawing any field that lands on
/// a fixed point.
pub(crate) fn seed_from<E: Entropy + ?Sized>(entropy: &mut E) -> Result<Seed, Error> {
    let x = draw_u64(entropy)?;
    let y = draw_until(entropy, "y", draw_u64, |y| *y != 0)?;
    let (c1, z1) = draw_until(entropy, "c1/z1", draw_pair, |&(c, z)| c != 0 || z != 0)?;
    let (c2, z2) = draw_until(entropy, "c2/z2", draw_pair, |&(c, z)| c != 0 || z != 0)?;

    Ok(Seed::new(x, y, c1, z1, c2, z2))
}

fn draw_until<E, T>(
    entropy: &mut E,
    field: &'static str,
    draw: fn(&mut E) -> Result<T, Error>,
    valid: impl Fn(&T) -> bool,
) -> Result<T, Error>
where
    E: Entropy + ?Sized,
{
    let mut value = draw(entropy)?;
    while !valid(&value) {
        warn!(field, "entropy landed on a generator fixed point, redrawing");
        value = draw(entropy)?;
    }
    Ok(value)
}

fn draw_u64<E: Entropy + ?Sized>(entropy: &mut E) -> Result<u64, Error> {
    let mut buf = [0u8; 8];
    entropy.fill(&mut buf)?;
    Ok(u64::from_ne_bytes(buf))
}

fn draw_u32<E: Entropy + ?Sized>(entropy: &mut E) -> Result<u32, Error> {
    let mut buf = [0u8; 4];
    entropy.fill(&mut buf)?;
    Ok(u32::from_ne_bytes(buf))
}

fn draw_pair<E: Entropy + ?Sized>(entropy: &mut E) -> Result<(u32, u32), Error> {
    Ok((draw_u32(entropy)?, draw_u32(entropy)?))
}

static ACTIVE: OnceLock<Box<dyn Seeder>> = OnceLock::new();

/// Installs the process-wide seeder. Write-once.
pub(crate) fn install(seeder: Box<dyn Seeder>) -> Result<(), Error> {
    ACTIVE
        .set(seeder)
        .map_err(|_| Error::AlreadyInitialized)?;

    debug!("seeder installed");
    Ok(())
}

/// The installed seeder, latching the default [`OsSeeder`] if none was
/// installed yet.
fn active() -> &'static dyn Seeder {
    let seeder = ACTIVE.get_or_init(|| {
        debug!("no seeder installed, using operating system entropy");
        Box::new(OsSeeder::new())
    });

    &**seeder
}

/// Runs the active seeder and rejects degenerate results.
pub(crate) fn fresh_seed() -> Result<Seed, Error> {
    let seed = active().seed()?;

    if !seed.is_valid() {
        return Err(Error::InvalidSeed);
    }

    Ok(seed)
}
