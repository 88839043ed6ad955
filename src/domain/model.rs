use serde::Deserialize;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_PLAYER_ID: &str = "admin";
pub const AVATAR_ROUTE: &str = "/api/get-avatar/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub base_url: String,
    pub player_id: String,
}

impl LookupRequest {
    pub fn new(base_url: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            player_id: player_id.into(),
        }
    }

    /// Plain concatenation; the player id is never escaped.
    pub fn target_url(&self) -> String {
        format!("{}{}{}", self.base_url, AVATAR_ROUTE, self.player_id)
    }
}

impl Default for LookupRequest {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_PLAYER_ID)
    }
}

/// Status and fully read body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Success payload of `GET /api/get-avatar/{player_id}`.
///
/// The key must be present, but its value is taken as-is: `null` or a number
/// is still a lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvatarModel {
    pub model_url: serde_json::Value,
}

impl AvatarModel {
    /// Strings verbatim, anything else as its JSON text.
    pub fn model_url_text(&self) -> String {
        match &self.model_url {
            serde_json::Value::String(url) => url.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { player_id: String, model_url: String },
    NotFound { player_id: String },
    UnexpectedStatus { status: u16, body: String },
    TransportFailure { message: String },
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found {
                player_id,
                model_url,
            } => write!(f, "Model URL for player_id '{}': {}", player_id, model_url),
            LookupOutcome::NotFound { player_id } => {
                write!(f, "No model found for player_id '{}'.", player_id)
            }
            LookupOutcome::UnexpectedStatus { status, body } => write!(
                f,
                "Failed to retrieve model URL. Status code: {}\nResponse: {}",
                status, body
            ),
            LookupOutcome::TransportFailure { message } => {
                write!(f, "Error during the request: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_is_plain_concatenation() {
        let request = LookupRequest::new("http://localhost:3001", "admin");
        assert_eq!(
            request.target_url(),
            "http://localhost:3001/api/get-avatar/admin"
        );

        let request = LookupRequest::new("http://host/", "a b/c?d=%20");
        assert_eq!(request.target_url(), "http://host//api/get-avatar/a b/c?d=%20");
    }

    #[test]
    fn test_default_request() {
        let request = LookupRequest::default();
        assert_eq!(request.base_url, "http://localhost:3001");
        assert_eq!(request.player_id, "admin");
    }

    #[test]
    fn test_model_url_text() {
        let model: AvatarModel =
            serde_json::from_str(r#"{"model_url":"https://cdn.example.com/a.glb"}"#).unwrap();
        assert_eq!(model.model_url_text(), "https://cdn.example.com/a.glb");

        let model: AvatarModel = serde_json::from_str(r#"{"model_url":7}"#).unwrap();
        assert_eq!(model.model_url_text(), "7");

        let model: AvatarModel = serde_json::from_str(r#"{"model_url":null}"#).unwrap();
        assert_eq!(model.model_url_text(), "null");
    }

    #[test]
    fn test_missing_model_url_is_rejected() {
        assert!(serde_json::from_str::<AvatarModel>(r#"{"url":"x"}"#).is_err());
        assert!(serde_json::from_str::<AvatarModel>(r#""just a string""#).is_err());
    }

    #[test]
    fn test_outcome_lines() {
        let found = LookupOutcome::Found {
            player_id: "admin".to_string(),
            model_url: "https://cdn.example.com/admin.glb".to_string(),
        };
        assert_eq!(
            found.to_string(),
            "Model URL for player_id 'admin': https://cdn.example.com/admin.glb"
        );

        let missing = LookupOutcome::NotFound {
            player_id: "admin".to_string(),
        };
        assert_eq!(missing.to_string(), "No model found for player_id 'admin'.");

        let failed = LookupOutcome::UnexpectedStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "Failed to retrieve model URL. Status code: 500\nResponse: Internal Server Error"
        );

        let transport = LookupOutcome::TransportFailure {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            transport.to_string(),
            "Error during the request: connection refused"
        );
    }
}
