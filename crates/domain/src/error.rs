//! Value-object validation errors.

use common::HashError;
use thiserror::Error;

/// Minimum age accepted at registration.
pub const MIN_AGE: i32 = 18;

/// Minimum raw password length in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors raised when a value object rejects its input.
///
/// Always returned, never panicked; the caller must check before using
/// the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An identifier was constructed from the nil UUID.
    #[error("{entity} id has nil value")]
    EmptyId {
        /// Which identifier rejected the nil UUID.
        entity: &'static str,
    },

    /// Email was empty.
    #[error("email is empty")]
    EmptyEmail,

    /// Email did not parse as an address.
    #[error("malformed email address: {0}")]
    InvalidEmail(String),

    /// Computed age was below [`MIN_AGE`].
    #[error("age must be at least {MIN_AGE}")]
    AgeTooLow,

    /// Marital status was empty.
    #[error("empty marital status")]
    EmptyMaritalStatus,

    /// Marital status was not one of the accepted values.
    #[error("unknown marital status: {0}")]
    UnknownMaritalStatus(String),

    /// Raw password was shorter than [`MIN_PASSWORD_LENGTH`] bytes.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} bytes, got {actual}")]
    PasswordTooShort {
        /// Length of the rejected password.
        actual: usize,
    },

    /// The hashing backend failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// First name was empty.
    #[error("empty first name")]
    EmptyFirstName,

    /// Last name was empty.
    #[error("empty last name")]
    EmptyLastName,

    /// Product title was empty.
    #[error("empty product title")]
    EmptyProductTitle,
}
