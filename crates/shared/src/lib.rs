//! Grocery App Shared DTOs
//!
//! The wire contract between the grocery client and server:
//! - Record types for categories, items, login and registration
//! - Typed UUID identities and a pluggable id generator
//! - A uniform JSON encode / decode contract ([`Dto`]) whose only failure
//!   is [`DecodeError`]
//! - [`BodySerializable`], so transports can send any record as a body
//!   (with `axum` support behind the `axum` feature)
//!
//! Records carry no validation and no business rules; that belongs to the
//! handlers and forms that produce and consume them.

pub mod body;
pub mod codec;
pub mod dto;
pub mod error {
    pub mod conversions;
    pub mod decode_error;
    pub mod kind;

    pub use decode_error::{DecodeError, DecodeResult};
    pub use kind::DecodeErrorKind;
}
pub mod id;


pub use body::BodySerializable;
#[cfg(feature = "axum")]
pub use body::DtoBody;
pub use codec::Dto;
pub use dto::{
    GroceryCategoryRequest, GroceryCategoryResponse, GroceryItemRequest, GroceryItemResponse,
    LoginResponse, RegisterResponse,
};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use id::{CategoryId, GroceryItemId, Id, IdGenerator, UserId};
