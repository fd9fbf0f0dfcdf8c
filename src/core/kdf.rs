//! Device-bound key derivation.
//!
//! Derives the payload decryption key from the device identity with
//! HKDF-SHA256, salted by a build-embedded constant and bound to a context
//! string. Derivation is deterministic per (identity, context) so payloads
//! sealed once at provisioning time can always be opened on the same
//! device, and keys differ across devices: the sealed payload plus the
//! static salt and context are not enough to reconstruct the key without
//! the identity bytes.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{Error, Result};

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Derive a 32-byte payload key from device identity bytes.
///
/// # Errors
///
/// Returns `Error::IdentityUnavailable` for an empty identity, which is
/// what a failed platform identity lookup degenerates to.
pub fn derive(identity: &[u8], context: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    if identity.is_empty() {
        return Err(Error::IdentityUnavailable(
            "device identity source returned no bytes".to_string(),
        ));
    }

    let hk = Hkdf::<Sha256>::new(Some(constants::HKDF_SALT), identity);
    let mut okm = Zeroizing::new([0u8; KEY_LEN]);
    hk.expand(context, okm.as_mut_slice())
        .map_err(|e| Error::Internal(format!("hkdf expand failed: {}", e)))?;

    Ok(okm)
}
