use crate::config::{FileConfig, LookupConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "avatar-lookup")]
#[command(about = "Fetch the avatar model URL for a player from the game server")]
pub struct CliConfig {
    /// Player to look up; takes precedence over --player-id
    #[arg(value_name = "PLAYER_ID")]
    pub player: Option<String>,

    #[arg(long, env = "AVATAR_PLAYER_ID", help = "Player to look up [default: admin]")]
    pub player_id: Option<String>,

    #[arg(
        long,
        env = "AVATAR_BASE_URL",
        help = "Server base URL [default: http://localhost:3001]"
    )]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML file providing base_url and player_id")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges the command line over the optional config file.
    pub fn resolve(&self) -> Result<LookupConfig> {
        let file = match &self.config {
            Some(path) => Some(FileConfig::from_file(path)?),
            None => None,
        };

        let player_id = self.player.clone().or_else(|| self.player_id.clone());

        Ok(LookupConfig::resolve(
            self.base_url.clone(),
            player_id,
            file.as_ref(),
        ))
    }
}
