//! Device identity boundary.
//!
//! The host platform supplies the identity bytes (installation ID, hardware
//! ID, or a keystore-backed secret); this module only defines the contract
//! the store consumes. The value must be stable across calls within a
//! device's lifetime and is opaque to the pipeline. The lookup may call
//! into a platform service and take non-trivial time; the store performs it
//! once, on first use.

use zeroize::Zeroizing;

use crate::error::Result;

/// Source of the device-specific byte sequence used for key derivation.
pub trait DeviceIdentitySource: Send + Sync {
    /// Produce the identity bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::IdentityUnavailable` if the platform cannot supply
    /// an identity. The store does not retry; retry policy belongs to the
    /// caller.
    fn device_identity(&self) -> Result<Zeroizing<Vec<u8>>>;
}

impl<T: DeviceIdentitySource + ?Sized> DeviceIdentitySource for std::sync::Arc<T> {
    fn device_identity(&self) -> Result<Zeroizing<Vec<u8>>> {
        (**self).device_identity()
    }
}

/// Fixed in-memory identity.
///
/// For tests, and for embedding hosts that resolve the platform identity
/// themselves before constructing the store.
pub struct FixedIdentity {
    bytes: Zeroizing<Vec<u8>>,
}

impl FixedIdentity {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }
}

impl DeviceIdentitySource for FixedIdentity {
    fn device_identity(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(self.bytes.to_vec()))
    }
}
