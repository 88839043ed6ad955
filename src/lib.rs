pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpSource;
pub use config::{FileConfig, LookupConfig};
pub use core::lookup::AvatarLookupClient;
pub use domain::model::{LookupOutcome, LookupRequest};
pub use utils::error::{LookupError, Result};
