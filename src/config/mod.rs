#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::FileConfig;

use crate::core::LookupRequest;
use crate::domain::model::{DEFAULT_BASE_URL, DEFAULT_PLAYER_ID};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

/// Fully resolved lookup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
    pub player_id: String,
}

impl LookupConfig {
    /// Layers explicit values over the file values over the defaults.
    pub fn resolve(
        base_url: Option<String>,
        player_id: Option<String>,
        file: Option<&FileConfig>,
    ) -> Self {
        let file_base_url = file.and_then(|f| f.base_url.clone());
        let file_player_id = file.and_then(|f| f.player_id.clone());

        Self {
            base_url: base_url
                .or(file_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            player_id: player_id
                .or(file_player_id)
                .unwrap_or_else(|| DEFAULT_PLAYER_ID.to_string()),
        }
    }

    pub fn to_request(&self) -> LookupRequest {
        LookupRequest::new(self.base_url.clone(), self.player_id.clone())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        // The player id is opaque, so only the base URL is checked.
        validate_url("base_url", &self.base_url)
    }
}
