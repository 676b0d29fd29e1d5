//! Oppsum CLI entry point.

use anyhow::Result;
use clap::Parser;
use oppsum::cli::{commands, Cli, Commands};
use oppsum::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("oppsum={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Ensure the data directory exists
    std::fs::create_dir_all(settings.data_dir())?;

    // Execute command
    match &cli.command {
        Commands::Search {
            query,
            max_results,
            page_token,
            json,
        } => {
            commands::run_search(query, *max_results, page_token.clone(), *json, settings).await?;
        }

        Commands::Captions { video, lang, json } => {
            commands::run_captions(video, lang.clone(), *json, settings).await?;
        }

        Commands::Summarize { video, lang, title } => {
            commands::run_summarize(video, lang.clone(), title.clone(), settings).await?;
        }

        Commands::Watch { video, lang } => {
            commands::run_watch(video, lang.clone(), settings).await?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host.clone(), *port, settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
