//! Build-embedded provisioning constants and fixed configuration.
//!
//! The obfuscation key and derivation salt are placeholders in source
//! control; the provisioning step regenerates this module per build with
//! fresh random values matching the ones used to seal the payload table.

/// Repeating XOR key applied to every sealed payload at rest.
pub const OBFUSCATION_KEY: &[u8] = &[
    0x9c, 0x41, 0x7e, 0xd3, 0x08, 0xaf, 0x62, 0xe5, 0x1b, 0x74, 0xc8, 0x2d, 0xf0, 0x56, 0x8a, 0x37,
];

/// Salt for device-key derivation, fixed per build.
pub const HKDF_SALT: &[u8] = &[
    0x2f, 0x8d, 0x13, 0xb6, 0x59, 0xe0, 0x77, 0x4a, 0xc1, 0x3e, 0x95, 0x68, 0x0b, 0xd2, 0xa4, 0x1f,
    0x86, 0x5c, 0xe9, 0x32, 0x7d, 0xb0, 0x48, 0xf5, 0x21, 0x6e, 0x9a, 0x07, 0xd8, 0x43, 0xbc, 0x60,
];

/// Default derivation context when the store is built without an explicit one.
pub const DEVICE_KEY_CONTEXT: &[u8] = b"keycell/v1/device-key";

/// API request timeout handed to the network layer, in seconds.
pub const API_TIMEOUT_SECS: u32 = 30;

/// Maximum retry attempts for failed API requests.
pub const MAX_RETRIES: u32 = 3;

/// Initial delay between retries, in milliseconds.
pub const RETRY_DELAY_MS: u32 = 1000;
