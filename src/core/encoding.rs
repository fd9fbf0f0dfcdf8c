//! Text-safe transcoding of sealed payloads.
//!
//! Sealed ciphertext is stored base64-encoded (standard alphabet, canonical
//! padding) underneath the XOR layer. Decoding is strict: an invalid
//! character, a bad length, or non-canonical padding fails the lookup
//! rather than yielding a silently truncated buffer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Decode de-obfuscated payload text into raw ciphertext bytes.
///
/// # Errors
///
/// Returns `Error::MalformedEncoding` if the input is not valid standard
/// base64.
pub fn decode(text: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    STANDARD
        .decode(text)
        .map(Zeroizing::new)
        .map_err(|e| Error::MalformedEncoding(e.to_string()))
}

/// Encode raw ciphertext for storage (provisioning side).
pub fn encode(raw: &[u8]) -> Vec<u8> {
    STANDARD.encode(raw).into_bytes()
}
