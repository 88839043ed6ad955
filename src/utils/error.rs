use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{}", describe_chain(.0))]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response body for status {status}: {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::Transport(_) => format!("Could not reach the avatar server: {}", self),
            LookupError::MalformedBody { status, .. } => format!(
                "The server answered {} but the body is not a valid avatar payload",
                status
            ),
            LookupError::Io(e) => format!("Could not write output: {}", e),
            LookupError::ConfigParse(e) => format!("Could not parse the configuration file: {}", e),
            LookupError::ConfigError { message } => message.clone(),
            LookupError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LookupError::Transport(_) => "Check that the server is running and the base URL is correct",
            LookupError::MalformedBody { .. } => {
                "Check that the server returns {\"model_url\": \"...\"} on success"
            }
            LookupError::Io(_) => "Check that standard output is writable",
            LookupError::ConfigParse(_) | LookupError::ConfigError { .. } => {
                "Check the configuration file path and its TOML syntax"
            }
            LookupError::InvalidConfigValue { .. } => "Pass an http(s) base URL",
        }
    }
}

/// Joins an error with its sources, so "error sending request" carries the
/// underlying "Connection refused".
fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, LookupError>;
