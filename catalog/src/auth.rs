//! Login and registration payloads.
//!
//! The backend reports auth outcomes twice: through the HTTP status and
//! through a `success` flag in the body. A 2xx response with
//! `success: false` is still a failure, so both clients funnel responses
//! through [`AuthResponse::into_token`] / [`AuthResponse::into_message`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Fallback shown when a login fails without a backend message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback shown when a signup fails without a backend message.
pub const SIGNUP_FAILED: &str = "Signup failed";
/// Confirmation shown after a successful signup.
pub const SIGNUP_SUCCEEDED: &str = "Signup successful!";

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of both auth endpoints. `token` is only present on login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Decode a 2xx auth response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not JSON.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Extract the issued token from a login response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false or the token is
    /// missing or empty.
    pub fn into_token(self) -> Result<String, ApiError> {
        if !self.success {
            return Err(self.rejection(LOGIN_FAILED));
        }
        match self.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::Rejected(LOGIN_FAILED.to_owned())),
        }
    }

    /// Confirm a registration response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_message(self) -> Result<String, ApiError> {
        if !self.success {
            return Err(self.rejection(SIGNUP_FAILED));
        }
        Ok(self.message.unwrap_or_else(|| SIGNUP_SUCCEEDED.to_owned()))
    }

    fn rejection(self, fallback: &str) -> ApiError {
        ApiError::Rejected(
            self.message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
        )
    }
}
