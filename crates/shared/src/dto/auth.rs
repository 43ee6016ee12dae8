//! Login and registration response DTOs
//!
//! `error` and `reason` are plain data. By convention a successful login
//! carries `token` and `userId` and no `reason`, a failure carries only
//! `reason`. The types do not enforce this: `new` accepts any combination,
//! and decoding accepts any combination. `success` / `failure` build the
//! conventional shapes.

use serde::{Deserialize, Serialize};

use crate::codec::Dto;
use crate::id::UserId;

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl LoginResponse {
    pub fn new(
        error: bool,
        reason: Option<String>,
        token: Option<String>,
        user_id: Option<UserId>,
    ) -> Self {
        Self {
            error,
            reason,
            token,
            user_id,
        }
    }

    pub fn success(token: impl Into<String>, user_id: UserId) -> Self {
        Self::new(false, None, Some(token.into()), Some(user_id))
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::new(true, Some(reason.into()), None, None)
    }
}

impl Dto for LoginResponse {
    const NAME: &'static str = "LoginResponse";
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RegisterResponse {
    pub fn new(error: bool, reason: Option<String>) -> Self {
        Self { error, reason }
    }

    pub fn success() -> Self {
        Self::new(false, None)
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::new(true, Some(reason.into()))
    }
}

impl Dto for RegisterResponse {
    const NAME: &'static str = "RegisterResponse";
}
