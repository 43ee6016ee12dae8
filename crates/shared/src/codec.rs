//! Encode / decode contract shared by every DTO
//!
//! Encoding is total: every record in this crate is built from strings,
//! numbers, booleans and ids, all of which `serde_json` always accepts.
//! Decoding returns a [`DecodeError`] describing the first problem found.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

/// A record that crosses the client/server boundary as JSON.
///
/// ## Examples
/// ```rust
/// use grocery_shared_dto::{Dto, GroceryItemRequest};
///
/// let bread = GroceryItemRequest::new("Bread", 3.49, 2);
/// assert_eq!(bread.to_json(), r#"{"title":"Bread","price":3.49,"quantity":2}"#);
///
/// let back = GroceryItemRequest::decode_str(&bread.to_json()).unwrap();
/// assert_eq!(back, bread);
/// ```
pub trait Dto: Serialize + DeserializeOwned {
    /// Record name used in errors and logs.
    const NAME: &'static str;

    /// Encode into a string-keyed JSON object.
    fn encode(&self) -> Value {
        serde_json::to_value(self).expect("DTO fields always serialize to JSON")
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).expect("DTO fields always serialize to JSON")
    }

    fn to_json_vec(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("DTO fields always serialize to JSON")
    }

    /// Decode from an already-parsed JSON value.
    fn decode(value: Value) -> DecodeResult<Self> {
        serde_json::from_value(value).map_err(decode_failed::<Self>)
    }

    fn decode_str(text: &str) -> DecodeResult<Self> {
        serde_json::from_str(text).map_err(decode_failed::<Self>)
    }

    fn decode_slice(bytes: &[u8]) -> DecodeResult<Self> {
        serde_json::from_slice(bytes).map_err(decode_failed::<Self>)
    }
}

fn decode_failed<T: Dto>(err: serde_json::Error) -> DecodeError {
    let err = DecodeError::from_json(T::NAME, err);
    tracing::debug!(
        record = T::NAME,
        kind = %err.kind(),
        field = err.field(),
        "DTO decode failed"
    );
    err
}
