use avatar_lookup::utils::{logger, validation::Validate};
use avatar_lookup::{AvatarLookupClient, CliConfig, HttpSource, LookupError};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // Advisory only: a bad base URL still goes through the client and is
    // reported as a transport failure.
    if let Err(e) = config.validate() {
        tracing::warn!("{}", e.user_friendly_message());
    }

    tracing::info!(
        "Looking up avatar for player_id '{}' at {}",
        config.player_id,
        config.base_url
    );

    let client = AvatarLookupClient::new(HttpSource::new());
    let mut stdout = std::io::stdout().lock();

    match client.run(&config.to_request(), &mut stdout).await {
        Ok(outcome) => {
            tracing::debug!("Lookup finished: {:?}", outcome);
            Ok(())
        }
        Err(e @ LookupError::MalformedBody { .. }) => {
            tracing::error!("{}", e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
