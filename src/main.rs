use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordsearch::{app, cli::Cli, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordsearch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search generator...");

    let cli = Cli::parse();

    // Load configuration, then let flags win
    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    tracing::info!("Configuration loaded");

    let report = app::generate(&config, &cli.words).await?;

    if !report.unplaced.is_empty() {
        tracing::warn!(
            "{} word(s) did not fit: {}",
            report.unplaced.len(),
            report.unplaced.join(", ")
        );
    }
    tracing::info!("Puzzle written to {}", report.path.display());
    tracing::info!("Rerun with --seed {} to reproduce this puzzle", report.seed);

    Ok(())
}
