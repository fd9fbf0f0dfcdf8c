//! Error taxonomy for secret lookups.
//!
//! Every pipeline stage failure is mapped to one of these variants at the
//! [`SecretStore::get`](crate::SecretStore::get) boundary and returned as a
//! typed error. Messages carry failure reasons only; key or plaintext
//! material never appears in an error value.

use thiserror::Error;

use crate::core::table::SecretKind;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested kind has no provisioned payload.
    #[error("secret not provisioned: {0}")]
    NotFound(SecretKind),

    /// The de-obfuscated payload is not valid base64.
    #[error("malformed payload encoding: {0}")]
    MalformedEncoding(String),

    /// The device identity source could not produce a value.
    #[error("device identity unavailable: {0}")]
    IdentityUnavailable(String),

    /// Tag verification rejected the payload (corruption or tampering).
    #[error("authentication failed: payload rejected")]
    AuthenticationFailed,

    /// Unexpected stage failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Stable reason code for structured log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::MalformedEncoding(_) => "malformed_encoding",
            Error::IdentityUnavailable(_) => "identity_unavailable",
            Error::AuthenticationFailed => "authentication_failed",
            Error::Internal(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
