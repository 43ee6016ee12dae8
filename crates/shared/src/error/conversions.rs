//! Error conversions
//!
//! Classifies `serde_json` failures into [`DecodeError`] and, behind the
//! `axum` feature, renders decode failures as HTTP responses.

use serde_json::error::Category;

use super::decode_error::DecodeError;
use super::kind::DecodeErrorKind;
use crate::id::EXPECTING_UUID;

// ============================================================================
// serde_json conversions
// ============================================================================

impl DecodeError {
    /// Wrap a `serde_json` failure for the named record.
    pub fn from_json(record: &'static str, err: serde_json::Error) -> Self {
        let (kind, field) = match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => (DecodeErrorKind::Syntax, None),
            Category::Data => classify_data(&err.to_string()),
        };
        DecodeError::new(record, kind, field, err)
    }
}

/// Splits serde's data errors by their message, which is the only place
/// serde exposes which check failed.
fn classify_data(message: &str) -> (DecodeErrorKind, Option<String>) {
    if let Some(rest) = message.strip_prefix("missing field `") {
        let field = rest.split('`').next().map(str::to_owned);
        return (DecodeErrorKind::MissingField, field);
    }

    // The last ", expected " belongs to serde, not to any quoted input value.
    let expected = message
        .rfind(", expected ")
        .map(|at| &message[at + ", expected ".len()..]);
    match expected {
        Some(rest) if rest.starts_with(EXPECTING_UUID) => (DecodeErrorKind::InvalidUuid, None),
        _ => (DecodeErrorKind::TypeMismatch, None),
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for DecodeError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        tracing::debug!(
            record = self.record(),
            kind = %self.kind(),
            error = %self,
            "Rejecting undecodable request body"
        );

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::UNPROCESSABLE_ENTITY);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.to_string(),
            "record": self.record(),
            "field": self.field(),
        });

        (status, Json(body)).into_response()
    }
}
