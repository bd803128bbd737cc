//! Wire types of the GoTrue REST API

use poliseek_domain::AuthUser;
use serde::{Deserialize, Serialize};

/// `GET /auth/v1/user` response (only the fields we use)
#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UserResponse> for AuthUser {
    fn from(user: UserResponse) -> Self {
        AuthUser {
            id: user.id,
            email: user.email,
        }
    }
}

/// `POST /auth/v1/token` response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Error body; GoTrue has used several shapes over time
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self, fallback: String) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .unwrap_or(fallback)
    }
}
