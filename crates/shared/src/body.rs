//! Body capability
//!
//! [`BodySerializable`] marks a DTO as usable directly as an HTTP body.
//! The trait itself knows nothing about any web framework; transports
//! look for it. With the `axum` feature every DTO also implements
//! `IntoResponse`, and [`DtoBody`] extracts a DTO from a request body.

use crate::codec::Dto;
use crate::dto::{
    GroceryCategoryRequest, GroceryCategoryResponse, GroceryItemRequest, GroceryItemResponse,
    LoginResponse, RegisterResponse,
};

/// A DTO a transport may send as a response body without an adapter type.
pub trait BodySerializable: Dto {
    const CONTENT_TYPE: &'static str = "application/json";

    fn to_body(&self) -> Vec<u8> {
        self.to_json_vec()
    }
}

macro_rules! body_serializable {
    ($($dto:ty),+ $(,)?) => {
        $(
            impl BodySerializable for $dto {}

            #[cfg(feature = "axum")]
            impl axum::response::IntoResponse for $dto {
                fn into_response(self) -> axum::response::Response {
                    axum_adapter::into_response(&self)
                }
            }
        )+
    };
}

body_serializable!(
    GroceryCategoryRequest,
    GroceryCategoryResponse,
    GroceryItemRequest,
    GroceryItemResponse,
    LoginResponse,
    RegisterResponse,
);

#[cfg(feature = "axum")]
pub use axum_adapter::DtoBody;

#[cfg(feature = "axum")]
mod axum_adapter {
    use axum::body::Bytes;
    use axum::extract::{FromRequest, Request};
    use axum::http::{HeaderValue, header};
    use axum::response::{IntoResponse, Response};

    use super::BodySerializable;
    use crate::codec::Dto;

    pub(super) fn into_response<T: BodySerializable>(dto: &T) -> Response {
        (
            [(header::CONTENT_TYPE, HeaderValue::from_static(T::CONTENT_TYPE))],
            dto.to_body(),
        )
            .into_response()
    }

    /// Request extractor that decodes the body with [`Dto::decode_slice`].
    ///
    /// Rejections are the [`DecodeError`](crate::error::DecodeError)
    /// problem document (400 / 422), or axum's own rejection when the
    /// body cannot be read at all.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DtoBody<T>(pub T);

    impl<T, S> FromRequest<S> for DtoBody<T>
    where
        T: Dto,
        S: Send + Sync,
    {
        type Rejection = Response;

        async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            T::decode_slice(&bytes)
                .map(DtoBody)
                .map_err(IntoResponse::into_response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UserId;

    #[test]
    fn test_body_matches_codec() {
        let response = LoginResponse::success("token", UserId::new());
        assert_eq!(response.to_body(), response.to_json_vec());
        assert_eq!(LoginResponse::CONTENT_TYPE, "application/json");
    }

    fn send_as_body<T: BodySerializable>(dto: &T) -> (&'static str, Vec<u8>) {
        (T::CONTENT_TYPE, dto.to_body())
    }

    #[test]
    fn test_any_dto_is_body_serializable() {
        let (content_type, body) = send_as_body(&RegisterResponse::failure("taken"));
        assert_eq!(content_type, "application/json");
        assert_eq!(body, br#"{"error":true,"reason":"taken"}"#);
    }
}
