//! Decode Error - the only failure this crate produces
//!
//! Defines [`DecodeError`] and the [`DecodeResult<T>`] alias.

use thiserror::Error;

use super::kind::DecodeErrorKind;

/// A document could not be decoded into the named record.
///
/// ## Fields
/// * `record` - DTO name, e.g. `"GroceryItemResponse"`
/// * `kind` - failure classification
/// * `field` - offending key, when serde reports one
/// * `source` - the underlying `serde_json` error
#[derive(Debug, Error)]
#[error("failed to decode {record}: [{kind}] {source}")]
pub struct DecodeError {
    record: &'static str,
    kind: DecodeErrorKind,
    field: Option<String>,
    #[source]
    source: serde_json::Error,
}

/// Shorthand for `Result<T, DecodeError>`
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    #[inline]
    pub fn new(
        record: &'static str,
        kind: DecodeErrorKind,
        field: Option<String>,
        source: serde_json::Error,
    ) -> Self {
        Self {
            record,
            kind,
            field,
            source,
        }
    }

    /// Name of the record that failed to decode.
    #[inline]
    pub fn record(&self) -> &'static str {
        self.record
    }

    #[inline]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Missing key for [`DecodeErrorKind::MissingField`], otherwise `None`.
    #[inline]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Line and column in the input, as reported by `serde_json`.
    ///
    /// Both are zero when decoding from an in-memory `Value`.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.source.line(), self.source.column())
    }

    #[inline]
    pub fn is_missing_field(&self) -> bool {
        self.kind == DecodeErrorKind::MissingField
    }

    #[inline]
    pub fn is_invalid_uuid(&self) -> bool {
        self.kind == DecodeErrorKind::InvalidUuid
    }
}
