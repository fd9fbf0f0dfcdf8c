//! Secure erasure of sensitive buffers.
//!
//! Wiping goes through the `zeroize` crate, whose writes are fenced against
//! dead-store elimination, so a wiped buffer observably reads back as
//! zeroes. Pipeline buffers additionally travel as `Zeroizing` wrappers,
//! which covers early returns and unwinds; the explicit [`wipe`] calls in
//! the store exist to erase each stage's buffer as soon as its consumer is
//! done with it and to emit the `secure_wipe` event.

use tracing::trace;
use zeroize::Zeroize;

/// Zero a sensitive buffer and record the wipe.
///
/// The event carries the buffer label only, never contents.
pub fn wipe<Z: Zeroize + ?Sized>(label: &str, buf: &mut Z) {
    buf.zeroize();
    trace!(buffer = label, "secure_wipe");
}
