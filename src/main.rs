use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use misinfo_atlas::config::Config;
use misinfo_atlas::dataset::Dataset;

/// misinfo-atlas: aggregate views over a social-media misinformation dataset.
///
/// Loads the dataset once and prints summary cards, per-platform
/// statistics, toxicity densities and a scatter sample.
#[derive(Parser)]
#[command(name = "misinfo-atlas", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dataset overview cards
    Overview,

    /// Show per-platform statistics
    Platforms,

    /// Show per-platform toxicity distributions
    Toxicity,

    /// Show the toxicity vs engagement scatter sample
    Scatter {
        /// Max points to show (never more than MISINFO_SCATTER_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the key findings
    Insights,

    /// Write every aggregate and the chart geometry to a JSON file
    Export {
        /// Output path
        #[arg(long, default_value = "output/misinfo-snapshot.json")]
        output: String,
    },

    /// Show dataset status (source, load state, row counts)
    Status,

    /// Serve the aggregates as a JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("misinfo_atlas=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Overview => {
            let dataset = load_dataset(&config).await?;
            misinfo_atlas::output::terminal::display_overview(&dataset.total_stats());
        }

        Commands::Platforms => {
            let dataset = load_dataset(&config).await?;
            misinfo_atlas::output::terminal::display_platforms(
                &dataset.platform_stats(&config.aggregate),
            );
        }

        Commands::Toxicity => {
            let dataset = load_dataset(&config).await?;
            misinfo_atlas::output::terminal::display_toxicity(
                &dataset.toxicity_distribution(&config.aggregate),
            );
            misinfo_atlas::output::terminal::display_scatter_legend(
                &dataset.scatter_data(&config.aggregate),
            );
        }

        Commands::Scatter { limit } => {
            if let Some(limit) = limit {
                config.aggregate.scatter_limit = limit.min(config.aggregate.scatter_limit);
            }
            let dataset = load_dataset(&config).await?;
            misinfo_atlas::output::terminal::display_scatter(
                &dataset.scatter_data(&config.aggregate),
            );
        }

        Commands::Insights => {
            let dataset = load_dataset(&config).await?;
            let snapshot = dataset.snapshot(&config.aggregate);
            misinfo_atlas::output::terminal::display_insights(&snapshot.insights);
        }

        Commands::Export { output } => {
            let dataset = load_dataset(&config).await?;
            let snapshot = dataset.snapshot(&config.aggregate);
            let document =
                misinfo_atlas::output::export::ExportDocument::new(dataset.source(), snapshot);
            let path = misinfo_atlas::output::export::write_snapshot(&document, &output)?;
            println!("{}", format!("Snapshot saved to: {path}").bold());
        }

        Commands::Status => {
            // Status reports a failed load instead of bailing on it.
            let source = config.record_source()?;
            let dataset = Dataset::load(source.as_ref()).await;
            misinfo_atlas::status::show(&dataset, &config.aggregate);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            misinfo_atlas::web::run_server(config, port, &bind).await?;
        }
    }

    Ok(())
}

/// Load the dataset once, with a spinner while the record source runs.
///
/// A load failure is turned into an error here: the CLI has nothing to
/// show without data.
async fn load_dataset(config: &Config) -> Result<Dataset> {
    config.require_dataset()?;
    let source = config.record_source()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Loading {}", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let dataset = Dataset::load(source.as_ref()).await;
    spinner.finish_and_clear();

    if let Some(error) = dataset.error() {
        anyhow::bail!("Failed to load dataset: {error}");
    }

    info!(rows = dataset.rows().len(), "Dataset ready");
    Ok(dataset)
}
