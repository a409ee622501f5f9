use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use subway_planner::console::Console;
use subway_planner::mbta::{FeedError, FeedSource, FixtureFeed, MbtaClient, MbtaConfig};
use subway_planner::network::{MalformedFeed, build_network};
use subway_planner::planner::SearchConfig;

/// Errors that end the program.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Network(#[from] MalformedFeed),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|e| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            e,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Config for the live client from the environment.
fn mbta_config() -> MbtaConfig {
    let mut config = MbtaConfig::new();
    match std::env::var("MBTA_API_KEY") {
        Ok(key) if !key.is_empty() => config = config.with_api_key(key),
        _ => eprintln!("Warning: MBTA_API_KEY not set. Requests will be rate limited."),
    }
    if let Ok(url) = std::env::var("MBTA_BASE_URL") {
        config = config.with_base_url(url);
    }
    config
}

async fn run() -> Result<(), AppError> {
    let feed = match std::env::var("MBTA_FIXTURES_DIR") {
        Ok(dir) => {
            info!(dir = %dir, "reading saved feed");
            FixtureFeed::new(dir).fetch_routes().await?
        }
        Err(_) => {
            println!("Fetching subway routes...");
            MbtaClient::new(mbta_config())?.fetch_routes().await?
        }
    };

    let network = build_network(&feed)?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    console.print_summary(&network)?;
    console.run(&network, &SearchConfig::default())?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "planner failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
