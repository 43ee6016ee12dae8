//! Decode Error Kind - Classification of decode failures
//!
//! Defines the [`DecodeErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Why a structured document could not become a DTO.
///
/// ## Examples
/// ```rust
/// use grocery_shared_dto::error::kind::DecodeErrorKind;
///
/// let kind = DecodeErrorKind::MissingField;
/// assert_eq!(kind.status_code(), 422);
/// assert_eq!(kind.as_str(), "Missing Field");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// A required key is absent.
    MissingField,
    /// A key is present but its value has the wrong JSON type or range.
    TypeMismatch,
    /// A UUID-typed field is not a hyphenated UUID string.
    InvalidUuid,
    /// The input is not well-formed JSON (or ends early).
    Syntax,
}

impl DecodeErrorKind {
    /// HTTP status code a transport should answer with.
    ///
    /// Malformed documents are `400 Bad Request`; well-formed JSON with the
    /// wrong shape is `422 Unprocessable Entity`.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            DecodeErrorKind::Syntax => 400,
            DecodeErrorKind::MissingField
            | DecodeErrorKind::TypeMismatch
            | DecodeErrorKind::InvalidUuid => 422,
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DecodeErrorKind::MissingField => "Missing Field",
            DecodeErrorKind::TypeMismatch => "Type Mismatch",
            DecodeErrorKind::InvalidUuid => "Invalid UUID",
            DecodeErrorKind::Syntax => "Malformed JSON",
        }
    }
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
