//! JSON bodies shared by the server routes and the CLI client.

use serde::{Deserialize, Serialize};

/// Body of every `POST /api/login` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub message: String,
}

impl LoginResponse {
    #[must_use]
    pub fn ok(token: String) -> Self {
        Self { success: true, token: Some(token), message: "Login successful".to_owned() }
    }

    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self { success: false, token: None, message: message.to_owned() }
    }
}

/// Rendered page descriptor. Markup is produced elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub locale: String,
    pub page: String,
    pub path: String,
    pub title: String,
}
