//! Secret kinds and the build-embedded payload table.
//!
//! The table is constructed once at startup from constants the provisioning
//! step writes into this module, and is immutable for the process lifetime.
//! Entries hold the sealed (obfuscated) form only; concurrent lookups share
//! them read-only.

use std::fmt;

/// The statically known secret kinds the application may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretKind {
    /// Backend API credential.
    ApiKey,
    /// Base URL of the backend API.
    ApiBaseUrl,
    /// Payment gateway merchant identifier.
    MerchantId,
    /// Primary certificate-pin hash.
    CertificatePinPrimary,
    /// Backup certificate-pin hash.
    CertificatePinBackup,
    /// Key for local data encryption.
    EncryptionKey,
}

impl SecretKind {
    /// Every kind, in table order.
    pub const ALL: [SecretKind; 6] = [
        SecretKind::ApiKey,
        SecretKind::ApiBaseUrl,
        SecretKind::MerchantId,
        SecretKind::CertificatePinPrimary,
        SecretKind::CertificatePinBackup,
        SecretKind::EncryptionKey,
    ];

    /// Stable name used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretKind::ApiKey => "api_key",
            SecretKind::ApiBaseUrl => "api_base_url",
            SecretKind::MerchantId => "merchant_id",
            SecretKind::CertificatePinPrimary => "certificate_pin_primary",
            SecretKind::CertificatePinBackup => "certificate_pin_backup",
            SecretKind::EncryptionKey => "encryption_key",
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named sealed payload.
///
/// The payload is the at-rest form (XOR over base64 over AEAD ciphertext),
/// never plaintext, so the entry itself is not wiped.
#[derive(Debug, Clone)]
pub struct SecretEntry {
    kind: SecretKind,
    payload: Vec<u8>,
}

impl SecretEntry {
    pub fn new(kind: SecretKind, payload: Vec<u8>) -> Self {
        Self { kind, payload }
    }

    pub fn kind(&self) -> SecretKind {
        self.kind
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// An entry with no payload is a slot the provisioning step has not
    /// filled; lookups treat it as absent.
    pub fn is_provisioned(&self) -> bool {
        !self.payload.is_empty()
    }
}

/// Immutable table of sealed payloads, one slot per kind at most.
#[derive(Debug, Clone, Default)]
pub struct SecretTable {
    entries: Vec<SecretEntry>,
}

impl SecretTable {
    /// Build a table from explicit entries.
    ///
    /// Later entries for the same kind shadow earlier ones, which lets a
    /// host overlay the built-in table.
    pub fn new(entries: Vec<SecretEntry>) -> Self {
        Self { entries }
    }

    /// The build-embedded table.
    ///
    /// The checked-in constants below are unfilled placeholders; the
    /// provisioning step rewrites them with payloads sealed for the target
    /// device population. Unfilled slots resolve to `NotFound` rather than
    /// an empty value.
    pub fn builtin() -> Self {
        Self::new(vec![
            SecretEntry::new(SecretKind::ApiKey, SEALED_API_KEY.to_vec()),
            SecretEntry::new(SecretKind::ApiBaseUrl, SEALED_API_BASE_URL.to_vec()),
            SecretEntry::new(SecretKind::MerchantId, SEALED_MERCHANT_ID.to_vec()),
            SecretEntry::new(
                SecretKind::CertificatePinPrimary,
                SEALED_CERT_PIN_PRIMARY.to_vec(),
            ),
            SecretEntry::new(
                SecretKind::CertificatePinBackup,
                SEALED_CERT_PIN_BACKUP.to_vec(),
            ),
            SecretEntry::new(SecretKind::EncryptionKey, SEALED_ENCRYPTION_KEY.to_vec()),
        ])
    }

    /// Look up the provisioned entry for a kind, if any.
    pub fn lookup(&self, kind: SecretKind) -> Option<&SecretEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.kind() == kind && e.is_provisioned())
    }
}

// Sealed payload slots, rewritten by the provisioning step.
const SEALED_API_KEY: &[u8] = &[];
const SEALED_API_BASE_URL: &[u8] = &[];
const SEALED_MERCHANT_ID: &[u8] = &[];
const SEALED_CERT_PIN_PRIMARY: &[u8] = &[];
const SEALED_CERT_PIN_BACKUP: &[u8] = &[];
const SEALED_ENCRYPTION_KEY: &[u8] = &[];
