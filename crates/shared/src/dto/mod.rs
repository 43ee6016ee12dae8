//! Data Transfer Objects
//!
//! - [`category`] - grocery category request / response
//! - [`item`] - grocery item request / response
//! - [`auth`] - login and registration responses
//!
//! All keys are camelCase on the wire. Optional fields are omitted when
//! `None` and read back from either a missing key or `null`.

pub mod auth;
pub mod category;
pub mod item;

pub use auth::{LoginResponse, RegisterResponse};
pub use category::{GroceryCategoryRequest, GroceryCategoryResponse};
pub use item::{GroceryItemRequest, GroceryItemResponse};
