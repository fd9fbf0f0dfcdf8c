//! Provisioning-side sealing.
//!
//! The exact forward transform the build-time provisioning step applies to
//! each plaintext before embedding it: AES-256-GCM under the device-derived
//! key with a fresh random nonce, base64 encoding, then the XOR layer. The
//! runtime pipeline in [`store`](crate::core::store) is its inverse by
//! construction, which the end-to-end tests rely on.
//!
//! Provisioning tooling itself (table generation, rotation) lives outside
//! this crate.

use crate::core::{aead, encoding, kdf, obfuscate};
use crate::error::Result;

/// Seal a plaintext for a device population identified by `identity`.
///
/// # Errors
///
/// Propagates derivation and encryption failures; see [`kdf::derive`] and
/// [`aead::seal`].
pub fn seal(
    plaintext: &[u8],
    identity: &[u8],
    context: &[u8],
    obfuscation_key: &[u8],
) -> Result<Vec<u8>> {
    let key = kdf::derive(identity, context)?;
    let ciphertext = aead::seal(plaintext, &key)?;
    let encoded = encoding::encode(&ciphertext);
    obfuscate::obfuscate(&encoded, obfuscation_key)
}
