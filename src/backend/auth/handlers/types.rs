/**
 * Authentication Handler Types
 *
 * Request and response bodies for `/signup` and `/signin`. Request fields are
 * optional at the serde level so a missing field becomes a 400 with a message
 * rather than an extractor rejection.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::{require_field, SharedError};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SigninRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Username and password, both present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    fn from_parts(username: Option<String>, password: Option<String>) -> Result<Self, SharedError> {
        Ok(Self {
            username: require_field("username", username)?,
            password: require_field("password", password)?,
        })
    }
}

impl TryFrom<SignupRequest> for Credentials {
    type Error = SharedError;

    fn try_from(request: SignupRequest) -> Result<Self, Self::Error> {
        Credentials::from_parts(request.username, request.password)
    }
}

impl TryFrom<SigninRequest> for Credentials {
    type Error = SharedError;

    fn try_from(request: SigninRequest) -> Result<Self, Self::Error> {
        Credentials::from_parts(request.username, request.password)
    }
}

/// Plain `{"msg": ...}` response body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Token returned by `/signin`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}
