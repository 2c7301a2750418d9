//! Random device access.
//!
//! Reads raw bytes from a character device such as `/dev/urandom`. This is
//! the fallback path on systems without a dedicated entropy API, and the
//! primary path when the `dev-random` feature is enabled.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// An open random device.
///
/// Opened once per seeding so that all fields of a seed come from one
/// sequential read stream.
pub(crate) struct Device {
    file: File,
}

impl Device {
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            file: File::open(path)?,
        })
    }

    /// Fills `buf` entirely.
    ///
    /// A short read is reported as [`io::ErrorKind::UnexpectedEof`]; the
    /// caller never receives a partially filled buffer as success.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.file.read_exact(buf)
    }
}
