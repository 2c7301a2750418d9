//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system entropy the generator is seeded from.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same `sys_random`
//! function, allowing the seeding code to remain fully portable:
//!
//! - Linux: the `getrandom` system call, falling back to the random device
//!   on kernels that predate it
//! - macOS: `arc4random_buf`
//! - Windows: `BCryptGenRandom`
//! - other Unix targets: the random device
//!
//! The random device path defaults to `/dev/urandom` and can be overridden
//! at build time through the `KISS64_DEV_RANDOM` environment variable.

mod device;

pub(crate) use device::Device;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

/// Path of the kernel random device used by device-backed seeding.
pub const DEV_RANDOM: &str = match option_env!("KISS64_DEV_RANDOM") {
    Some(path) => path,
    None => "/dev/urandom",
};

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) fn sys_random(buf: &mut [u8]) -> std::io::Result<()> {
    Device::open(std::path::Path::new(DEV_RANDOM))?.fill(buf)
}
