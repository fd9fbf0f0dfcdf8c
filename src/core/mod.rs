//! Core library components.
//!
//! This module contains the unwrapping pipeline stages, the secret table,
//! and the lookup orchestration.

pub mod aead;
pub mod constants;
pub mod encoding;
pub mod identity;
pub mod kdf;
pub mod obfuscate;
pub mod seal;
pub mod store;
pub mod table;
pub mod wipe;
