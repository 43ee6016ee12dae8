//! Grocery item DTOs
//!
//! `price` is an `f64`. `serde_json` writes the shortest text that reads
//! back to the same float, and the workspace enables its exact
//! `float_roundtrip` parser, so every finite price decodes to the identical
//! bits it was encoded from (`3.49` stays `3.49`).
//!
//! Non-finite prices are not rejected, but they do not survive the wire:
//! NaN and the infinities encode as `null`, which then fails to decode as
//! a type mismatch.

use serde::{Deserialize, Serialize};

use crate::codec::Dto;
use crate::id::GroceryItemId;

/// Create or update an item. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItemRequest {
    pub title: String,
    pub price: f64,
    pub quantity: i64,
}

impl GroceryItemRequest {
    pub fn new(title: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            title: title.into(),
            price,
            quantity,
        }
    }
}

impl Dto for GroceryItemRequest {
    const NAME: &'static str = "GroceryItemRequest";
}

/// A persisted item. Unlike categories, the id is always supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItemResponse {
    pub id: GroceryItemId,
    pub title: String,
    pub price: f64,
    pub quantity: i64,
}

impl GroceryItemResponse {
    pub fn new(id: GroceryItemId, title: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            quantity,
        }
    }

    /// Attach an assigned id to a request payload.
    pub fn from_request(id: GroceryItemId, request: GroceryItemRequest) -> Self {
        Self {
            id,
            title: request.title,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

impl Dto for GroceryItemResponse {
    const NAME: &'static str = "GroceryItemResponse";
}
