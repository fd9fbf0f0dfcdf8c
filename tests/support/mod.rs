//! Shared helpers for keycell integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use zeroize::Zeroizing;

use keycell::core::{constants, seal};
use keycell::{
    DeviceIdentitySource, Error, FixedIdentity, SecretEntry, SecretKind, SecretStore, SecretTable,
};

pub const DEVICE_A: &[u8] = b"device-123";
pub const DEVICE_B: &[u8] = b"device-456";

/// Seal one plaintext with the build constants for the given identity.
pub fn sealed_for(plaintext: &str, identity: &[u8]) -> Vec<u8> {
    seal::seal(
        plaintext.as_bytes(),
        identity,
        constants::DEVICE_KEY_CONTEXT,
        constants::OBFUSCATION_KEY,
    )
    .unwrap()
}

/// Store holding a single provisioned entry, bound to `identity`.
pub fn store_with(kind: SecretKind, plaintext: &str, identity: &[u8]) -> SecretStore {
    let table = SecretTable::new(vec![SecretEntry::new(kind, sealed_for(plaintext, identity))]);
    SecretStore::new(table, FixedIdentity::new(identity.to_vec()))
}

/// Identity source that always fails, for exercising the unavailable path.
pub struct UnavailableIdentity;

impl DeviceIdentitySource for UnavailableIdentity {
    fn device_identity(&self) -> keycell::Result<Zeroizing<Vec<u8>>> {
        Err(Error::IdentityUnavailable(
            "platform identity service unreachable".to_string(),
        ))
    }
}

/// Identity source that counts how many times it is queried.
pub struct CountingIdentity {
    bytes: Vec<u8>,
    pub calls: AtomicUsize,
}

impl CountingIdentity {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl DeviceIdentitySource for CountingIdentity {
    fn device_identity(&self) -> keycell::Result<Zeroizing<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Zeroizing::new(self.bytes.clone()))
    }
}
