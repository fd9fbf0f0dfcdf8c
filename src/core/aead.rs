//! Authenticated payload decryption (AES-256-GCM).
//!
//! Sealed ciphertext is laid out as `nonce || encrypted_data || tag` with a
//! 12-byte nonce and a 16-byte tag. The tag is verified against the derived
//! key, nonce, and ciphertext before any plaintext is released; a mismatch
//! fails closed with zero plaintext bytes. Corruption and tampering are
//! indistinguishable at this layer and both surface as
//! [`Error::AuthenticationFailed`].

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use zeroize::Zeroizing;

use crate::core::kdf::KEY_LEN;
use crate::error::{Error, Result};

/// Nonce width at the front of every sealed payload.
pub const NONCE_LEN: usize = 12;

/// Authentication tag width at the end of every sealed payload.
pub const TAG_LEN: usize = 16;

/// Verify and decrypt a sealed payload.
///
/// # Errors
///
/// Returns `Error::AuthenticationFailed` if the payload is shorter than
/// `nonce + tag` or if tag verification rejects it. No partial plaintext
/// is ever produced.
pub fn open(ciphertext: &[u8], key: &[u8; KEY_LEN]) -> Result<Zeroizing<Vec<u8>>> {
    if ciphertext.len() < NONCE_LEN + TAG_LEN {
        return Err(Error::AuthenticationFailed);
    }

    let (nonce, body) = ciphertext.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    cipher
        .decrypt(Nonce::from_slice(nonce), body)
        .map(Zeroizing::new)
        .map_err(|_| Error::AuthenticationFailed)
}

/// Encrypt a plaintext under a derived key with a fresh random nonce
/// (provisioning side).
///
/// Each sealed payload carries its own nonce, so sealing distinct payloads
/// under the same device key never reuses one.
pub fn seal(plaintext: &[u8], key: &[u8; KEY_LEN]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let body = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| Error::Internal(format!("seal failed: {}", e)))?;

    let mut out = Vec::with_capacity(NONCE_LEN + body.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&body);
    Ok(out)
}
