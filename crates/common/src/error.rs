//! Common error types shared across crates.

use thiserror::Error;

/// Longest chirp accepted, in bytes.
pub const MAX_CHIRP_LEN: usize = 140;

/// Top-level service error type.
///
/// Every variant is terminal for the request that produced it. Variants map
/// to HTTP status codes returned to callers:
/// - [`ServiceError::Decode`] → 500
/// - [`ServiceError::EmptyBody`], [`ServiceError::EmptyEmail`],
///   [`ServiceError::TooLong`] → 400
/// - [`ServiceError::Forbidden`] → 403
/// - [`ServiceError::Persistence`], [`ServiceError::Encode`] → 500
///
/// The `Display` output is the exact message placed in the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request body could not be decoded into the expected shape.
    #[error("Something went wrong")]
    Decode,

    /// The submitted chirp body is empty.
    #[error("Chirp cannot be empty")]
    EmptyBody,

    /// The submitted email is empty.
    #[error("Email cannot be empty")]
    EmptyEmail,

    /// The submitted chirp exceeds [`MAX_CHIRP_LEN`] bytes.
    #[error("Chirp is too long")]
    TooLong,

    /// A privileged operation was attempted outside the development platform.
    #[error("Forbidden")]
    Forbidden,

    /// The storage collaborator failed. Carries the full client-facing message.
    #[error("{0}")]
    Persistence(String),

    /// A response payload could not be serialised.
    #[error("failed to encode response: {0}")]
    Encode(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::Decode => 500,
            ServiceError::EmptyBody | ServiceError::EmptyEmail | ServiceError::TooLong => 400,
            ServiceError::Forbidden => 403,
            ServiceError::Persistence(_) | ServiceError::Encode(_) => 500,
        }
    }
}
