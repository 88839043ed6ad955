use crate::utils::error::{LookupError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional on-disk settings; any key left out falls through to the defaults.
///
/// ```toml
/// base_url = "http://localhost:3001"
/// player_id = "admin"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub player_id: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LookupError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::from_toml_str(
            r#"
base_url = "http://game.local:3001"
player_id = "p42"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url.as_deref(), Some("http://game.local:3001"));
        assert_eq!(config.player_id.as_deref(), Some("p42"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config = FileConfig::from_toml_str(r#"player_id = "p42""#).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = FileConfig::from_toml_str(r#"timeout = 5"#);
        assert!(matches!(result, Err(LookupError::ConfigParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "https://avatars.example.com""#).unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://avatars.example.com")
        );
    }

    #[test]
    fn test_missing_file() {
        let result = FileConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(LookupError::ConfigError { .. })));
    }
}
