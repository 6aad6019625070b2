//! Login, logout, and session introspection.
//!
//! Token persistence is deliberately not handled here: the session layer (or
//! the CLI's token file) owns the credential. `logout` callers must clear
//! their store in a guaranteed-release path even when the call fails.

use reqwest::Method;

use brezza_api_types::{AuthResponse, LoginRequest, UserInfo};

use super::{ApiClient, Auth};
use crate::error::ApiError;

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.request(
            Method::POST,
            "api/auth/login",
            None,
            Some(serde_json::to_value(credentials)?),
            Auth::None,
        )
        .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "api/auth/logout", None, None, Auth::Bearer)
            .await
    }

    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.request(Method::GET, "api/auth/me", None, None, Auth::Bearer)
            .await
    }
}
