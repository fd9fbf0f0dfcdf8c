//! Secret lookup orchestration.
//!
//! [`SecretStore`] owns the immutable payload table and runs the unwrapping
//! pipeline per lookup, in fixed order: XOR-deobfuscate, base64-decode,
//! derive device key, AES-256-GCM open. Results are never cached; every
//! call re-runs decryption so plaintext exposure is bounded to the
//! caller's use of the returned value. The derived key is the one piece of
//! state kept across calls, computed exactly once and wiped when the store
//! is dropped.

use std::sync::Mutex;

use tracing::{debug, trace, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::core::identity::DeviceIdentitySource;
use crate::core::kdf::{self, KEY_LEN};
use crate::core::table::{SecretKind, SecretTable};
use crate::core::{aead, constants, encoding, obfuscate, wipe};
use crate::error::{Error, Result};

/// Cached device key material. Never persisted; zeroed on drop.
struct DeviceKey {
    bytes: [u8; KEY_LEN],
}

impl Drop for DeviceKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Read-only secret store bound to one device identity source.
///
/// Safe to share across threads: the table is immutable and the key cache
/// is synchronized. The first lookup performs the platform identity call
/// under the cache lock; concurrent first callers block until that single
/// derivation completes.
pub struct SecretStore {
    table: SecretTable,
    source: Box<dyn DeviceIdentitySource>,
    context: Vec<u8>,
    device_key: Mutex<Option<DeviceKey>>,
}

impl SecretStore {
    /// Build a store over an explicit table with the default derivation
    /// context.
    pub fn new<S: DeviceIdentitySource + 'static>(table: SecretTable, source: S) -> Self {
        Self::with_context(table, source, constants::DEVICE_KEY_CONTEXT.to_vec())
    }

    /// Build a store with an explicit derivation context.
    ///
    /// The context must match the one used at sealing time or every lookup
    /// fails authentication.
    pub fn with_context<S: DeviceIdentitySource + 'static>(
        table: SecretTable,
        source: S,
        context: Vec<u8>,
    ) -> Self {
        Self {
            table,
            source: Box::new(source),
            context,
            device_key: Mutex::new(None),
        }
    }

    /// Build a store over the build-embedded table.
    pub fn builtin<S: DeviceIdentitySource + 'static>(source: S) -> Self {
        Self::new(SecretTable::builtin(), source)
    }

    /// Unwrap the secret of the given kind.
    ///
    /// # Returns
    ///
    /// The plaintext wrapped in `Zeroizing`, so the caller's copy is wiped
    /// when dropped.
    ///
    /// # Errors
    ///
    /// Every stage failure is mapped to the [`Error`] taxonomy; on any
    /// failure all intermediate buffers are wiped and no partial output is
    /// returned.
    pub fn get(&self, kind: SecretKind) -> Result<Zeroizing<String>> {
        debug!(kind = %kind, "decrypt_attempt");
        match self.unwrap_entry(kind) {
            Ok(plaintext) => Ok(plaintext),
            Err(err) => {
                warn!(kind = %kind, reason = err.reason(), "decrypt_failure");
                Err(err)
            }
        }
    }

    fn unwrap_entry(&self, kind: SecretKind) -> Result<Zeroizing<String>> {
        let entry = self.table.lookup(kind).ok_or(Error::NotFound(kind))?;

        let mut text = obfuscate::deobfuscate(entry.payload(), constants::OBFUSCATION_KEY)?;
        let decoded = encoding::decode(&text);
        wipe::wipe("deobfuscated", text.as_mut_slice());
        let mut ciphertext = decoded?;

        let key = self.device_key()?;
        let opened = aead::open(&ciphertext, &key);
        wipe::wipe("decoded", ciphertext.as_mut_slice());
        let plaintext = opened?;

        match std::str::from_utf8(&plaintext) {
            Ok(s) => Ok(Zeroizing::new(s.to_string())),
            Err(_) => Err(Error::Internal(
                "decrypted payload is not valid UTF-8".to_string(),
            )),
        }
    }

    /// Derived key for this device, computed once and cached in memory.
    fn device_key(&self) -> Result<Zeroizing<[u8; KEY_LEN]>> {
        let mut slot = self
            .device_key
            .lock()
            .map_err(|_| Error::Internal("device key cache poisoned".to_string()))?;

        if let Some(key) = slot.as_ref() {
            return Ok(Zeroizing::new(key.bytes));
        }

        let mut identity = self.source.device_identity()?;
        let derived = kdf::derive(&identity, &self.context)?;
        wipe::wipe("device_identity", identity.as_mut_slice());

        let key = DeviceKey { bytes: *derived };
        let out = Zeroizing::new(key.bytes);
        *slot = Some(key);
        trace!("device key derived and cached");
        Ok(out)
    }

    /// Backend API credential.
    pub fn api_key(&self) -> Result<Zeroizing<String>> {
        self.get(SecretKind::ApiKey)
    }

    /// Base URL of the backend API.
    pub fn api_base_url(&self) -> Result<Zeroizing<String>> {
        self.get(SecretKind::ApiBaseUrl)
    }

    /// Payment gateway merchant identifier.
    pub fn merchant_id(&self) -> Result<Zeroizing<String>> {
        self.get(SecretKind::MerchantId)
    }

    /// Primary certificate-pin hash.
    pub fn certificate_pin_primary(&self) -> Result<Zeroizing<String>> {
        self.get(SecretKind::CertificatePinPrimary)
    }

    /// Backup certificate-pin hash.
    pub fn certificate_pin_backup(&self) -> Result<Zeroizing<String>> {
        self.get(SecretKind::CertificatePinBackup)
    }

    /// Key for local data encryption.
    pub fn encryption_key(&self) -> Result<Zeroizing<String>> {
        self.get(SecretKind::EncryptionKey)
    }

    /// API request timeout in seconds. Not sensitive, returned unencrypted.
    pub fn api_timeout_secs(&self) -> u32 {
        constants::API_TIMEOUT_SECS
    }

    /// Maximum retry attempts for failed API requests.
    pub fn max_retries(&self) -> u32 {
        constants::MAX_RETRIES
    }

    /// Initial delay between retries, in milliseconds.
    pub fn retry_delay_ms(&self) -> u32 {
        constants::RETRY_DELAY_MS
    }
}

impl Drop for SecretStore {
    fn drop(&mut self) {
        // DeviceKey zeroes itself on drop; the event records the teardown
        // wipe of the long-lived buffer.
        if let Ok(mut slot) = self.device_key.lock() {
            if slot.take().is_some() {
                trace!(buffer = "derived_key", "secure_wipe");
            }
        }
    }
}
