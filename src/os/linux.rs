//! Operating system abstraction layer (Linux)
//!
//! On Linux, random bytes come from the kernel through the `getrandom`
//! system call, which never blocks once the entropy pool is initialized.
//! Kernels older than 3.17 lack the call; there the random device is read
//! instead.

use std::io;
use std::path::Path;

use libc::{c_void, getrandom};

use super::{DEV_RANDOM, Device};

/// Fills a buffer with random bytes from the kernel.
///
/// This function repeatedly calls `getrandom` until the entire buffer is
/// filled. Partial reads and `EINTR` are handled transparently.
///
/// # Errors
/// Returns the OS error if `getrandom` fails for any other reason, or the
/// device error if the fallback device cannot be read.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            match err.raw_os_error() {
                Some(libc::EINTR) => continue,
                Some(libc::ENOSYS) => {
                    return Device::open(Path::new(DEV_RANDOM))?.fill(&mut buf[filled..]);
                }
                _ => return Err(err),
            }
        }

        filled += ret as usize;
    }

    Ok(())
}
