//! Keycell - device-bound secret provisioning core for mobile applications.
//!
//! Keycell holds sensitive configuration values (API credentials, payment
//! merchant identifiers, encryption keys, certificate-pin hashes) as
//! obfuscated build-embedded constants and releases a plaintext only after
//! a layered unwrapping pipeline bound to the requesting device's identity.
//! The managed application layer calls across its FFI boundary into this
//! core, fetches a secret when needed, and must treat every returned value
//! as short-lived and non-cacheable.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error taxonomy and Result alias
//! └── core/             # Core library components
//!     ├── table         # Secret kinds and the build-embedded payload table
//!     ├── store         # Lookup orchestration and derived-key cache
//!     ├── obfuscate     # Repeating-key XOR layer
//!     ├── encoding      # Base64 transcoding
//!     ├── kdf           # Device-bound key derivation (HKDF-SHA256)
//!     ├── aead          # Authenticated decryption (AES-256-GCM)
//!     ├── seal          # Provisioning-side forward transform
//!     ├── identity      # Device identity boundary
//!     ├── wipe          # Secure erasure of sensitive buffers
//!     └── constants     # Build-embedded salts and fixed configuration
//! ```
//!
//! # Unwrapping pipeline
//!
//! Each lookup runs the fixed stage order XOR-deobfuscate, base64-decode,
//! derive device key, AES-256-GCM open. Any stage failure aborts the call,
//! wipes accumulated intermediate state, and surfaces a typed [`Error`];
//! partially decrypted output is never returned.
//!
//! # Example
//!
//! ```
//! use keycell::{FixedIdentity, SecretEntry, SecretKind, SecretStore, SecretTable};
//! use keycell::core::{constants, seal};
//!
//! // Normally done once by the build-time provisioning step.
//! let payload = seal::seal(
//!     b"https://api.example.test/v1/",
//!     b"device-123",
//!     constants::DEVICE_KEY_CONTEXT,
//!     constants::OBFUSCATION_KEY,
//! )
//! .unwrap();
//!
//! let table = SecretTable::new(vec![SecretEntry::new(SecretKind::ApiBaseUrl, payload)]);
//! let store = SecretStore::new(table, FixedIdentity::new(b"device-123".to_vec()));
//!
//! let url = store.api_base_url().unwrap();
//! assert_eq!(url.as_str(), "https://api.example.test/v1/");
//! // `url` zeroizes its backing memory when dropped.
//! ```

pub mod core;
pub mod error;

pub use crate::core::identity::{DeviceIdentitySource, FixedIdentity};
pub use crate::core::store::SecretStore;
pub use crate::core::table::{SecretEntry, SecretKind, SecretTable};
pub use crate::error::{Error, Result};
