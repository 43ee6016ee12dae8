//! Grocery category DTOs

use serde::{Deserialize, Serialize};

use crate::codec::Dto;
use crate::id::{CategoryId, Id, IdGenerator, RandomIdGenerator};

/// Create or update a category. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryCategoryRequest {
    pub title: String,
    /// Display color, conventionally `#RRGGBB`
    pub color_code: String,
}

impl GroceryCategoryRequest {
    pub fn new(title: impl Into<String>, color_code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color_code: color_code.into(),
        }
    }
}

impl Dto for GroceryCategoryRequest {
    const NAME: &'static str = "GroceryCategoryRequest";
}

/// A persisted category.
///
/// `id` is required on the wire; only the constructors fill it in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryCategoryResponse {
    pub id: CategoryId,
    pub title: String,
    pub color_code: String,
}

impl GroceryCategoryResponse {
    /// Build with a fresh random id.
    pub fn new(title: impl Into<String>, color_code: impl Into<String>) -> Self {
        Self::with_generator(&RandomIdGenerator, title, color_code)
    }

    pub fn with_id(
        id: CategoryId,
        title: impl Into<String>,
        color_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            color_code: color_code.into(),
        }
    }

    pub fn with_generator(
        generator: &dyn IdGenerator,
        title: impl Into<String>,
        color_code: impl Into<String>,
    ) -> Self {
        Self::with_id(Id::generate(generator), title, color_code)
    }

    /// Attach an assigned id to a request payload.
    pub fn from_request(id: CategoryId, request: GroceryCategoryRequest) -> Self {
        Self {
            id,
            title: request.title,
            color_code: request.color_code,
        }
    }
}

impl Dto for GroceryCategoryResponse {
    const NAME: &'static str = "GroceryCategoryResponse";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeErrorKind;
    use crate::id::SequentialIdGenerator;

    #[test]
    fn test_request_wire_names() {
        let request = GroceryCategoryRequest::new("Dairy", "#FFFFFF");
        assert_eq!(
            request.encode(),
            json!({ "title": "Dairy", "colorCode": "#FFFFFF" })
        );
    }

    #[test]
    fn test_request_rejects_snake_case_key() {
        let err =
            GroceryCategoryRequest::decode(json!({ "title": "Dairy", "color_code": "#FFFFFF" }))
                .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.field(), Some("colorCode"));
    }

    #[test]
    fn test_response_default_id_is_fresh() {
        let a = GroceryCategoryResponse::new("Dairy", "#FFFFFF");
        let b = GroceryCategoryResponse::new("Dairy", "#FFFFFF");
        assert!(!a.id.is_nil());
        assert!(!b.id.is_nil());
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_response_with_injected_generator() {
        let generator = SequentialIdGenerator::new();
        let dairy = GroceryCategoryResponse::with_generator(&generator, "Dairy", "#FFFFFF");
        let bakery = GroceryCategoryResponse::with_generator(&generator, "Bakery", "#C08040");

        assert_eq!(
            dairy.encode(),
            json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "title": "Dairy",
                "colorCode": "#FFFFFF",
            })
        );
        assert_eq!(bakery.id.to_string(), "00000000-0000-0000-0000-000000000002");
    }

    #[test]
    fn test_response_requires_id_on_decode() {
        let err = GroceryCategoryResponse::decode(json!({ "title": "Dairy", "colorCode": "#FFF" }))
            .unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn test_from_request() {
        let id = CategoryId::new();
        let response =
            GroceryCategoryResponse::from_request(id, GroceryCategoryRequest::new("Fruit", "#00FF00"));
        assert_eq!(response, GroceryCategoryResponse::with_id(id, "Fruit", "#00FF00"));
    }

    #[test]
    fn test_response_round_trip() {
        let response = GroceryCategoryResponse::new("Frozen", "#87CEEB");
        let back = GroceryCategoryResponse::decode(response.encode()).unwrap();
        assert_eq!(back, response);
    }
}
