// System status display — dataset location, load state, row counts.

use colored::Colorize;

use crate::aggregate::scatter::Jitter;
use crate::aggregate::AggregateConfig;
use crate::dataset::{Dataset, LoadStatus};

/// Display dataset status to the terminal.
pub fn show(dataset: &Dataset, config: &AggregateConfig) {
    println!("Dataset: {}", dataset.source());

    match dataset.status() {
        LoadStatus::Loading => {
            println!("Status: {}", "loading".yellow());
            return;
        }
        LoadStatus::Failed(message) => {
            println!("Status: {}", "failed".red().bold());
            println!("  {message}");
            println!("\nCheck MISINFO_DATASET in your .env file.");
            return;
        }
        LoadStatus::Ready => {
            println!("Status: {}", "ready".green());
        }
    }

    if let Some(loaded_at) = dataset.loaded_at() {
        println!("Loaded at: {}", loaded_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    let total = dataset.total_stats();
    println!(
        "Rows: {} kept, {} dropped (no identifier)",
        total.total_posts,
        dataset.dropped_count()
    );
    println!("Platforms observed: {}", total.platforms);

    let stats = dataset.platform_stats(config);
    let charted: usize = stats.iter().map(|s| s.total_posts).sum();
    println!(
        "Platforms charted: {} ({} of {} rows)",
        config.platforms.join(", "),
        charted,
        total.total_posts
    );

    let jitter = match config.jitter {
        Jitter::Random => "random per query".to_string(),
        Jitter::Seeded(seed) => format!("seeded ({seed})"),
    };
    println!(
        "Scatter sample: up to {} rows, z-jitter {}",
        config.scatter_limit, jitter
    );
}
