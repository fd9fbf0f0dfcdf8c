//! Repeating-key XOR obfuscation layer.
//!
//! This is the outermost wrapping of every embedded payload. It deters
//! casual string extraction from the compiled binary and nothing more:
//! the transform is not a cryptographic boundary, and a motivated attacker
//! with the binary can reverse it. Confidentiality comes from the AEAD
//! layer underneath.
//!
//! The transform is involutive: applying it twice with the same key
//! restores the original bytes, so [`deobfuscate`] and the forward
//! direction used at provisioning time are the same operation.

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// XOR `buf[i]` with `key[i mod key.len()]` in place.
fn xor_in_place(buf: &mut [u8], key: &[u8]) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key[i % key.len()];
    }
}

/// Reverse the build-time XOR transform on an embedded payload.
///
/// The output is an intermediate pipeline buffer and is returned wrapped
/// in `Zeroizing` so it is wiped on every exit path.
///
/// # Errors
///
/// Returns `Error::Internal` for an empty key; that is a provisioning bug,
/// not a runtime condition.
pub fn deobfuscate(payload: &[u8], key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if key.is_empty() {
        return Err(Error::Internal("empty obfuscation key".to_string()));
    }
    let mut out = Zeroizing::new(payload.to_vec());
    xor_in_place(&mut out, key);
    Ok(out)
}

/// Apply the at-rest transform to an encoded payload (provisioning side).
///
/// The output is the stored form, not secret material, so it is returned
/// as a plain vector.
pub fn obfuscate(encoded: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::Internal("empty obfuscation key".to_string()));
    }
    let mut out = encoded.to_vec();
    xor_in_place(&mut out, key);
    Ok(out)
}
