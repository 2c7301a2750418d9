//! KISS64 generator core.
//!
//! The generator is split into two layers:
//!
//! - [`core`]
//!   The [`Seed`] state and the KISS64 step, combining a linear
//!   congruential generator, a 64-bit xorshift and two 32-bit
//!   multiply-with-carry generators into one 64-bit output word.
//!
//! - [`uniform`]
//!   Unbiased sampling over `[0, n)` by rejection, built on the raw step.
//!
//! Everything in this module is pure arithmetic over an explicit state: no
//! thread binding, no seeding and no I/O. The per-thread surface lives at
//! the crate root.

pub mod core;
pub mod uniform;

pub use self::core::{Seed, advance};
pub use self::uniform::uniform;
