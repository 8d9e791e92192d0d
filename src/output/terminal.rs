// Colored terminal output for the dashboard sections.
//
// Each function prints one section: overview cards, the platform table,
// toxicity densities, the scatter sample, and the key findings.

use colored::{ColoredString, Colorize};

use super::{format_fraction, format_percent, format_thousands, hex_to_rgb, share_percent};
use crate::aggregate::density::DensityProfile;
use crate::aggregate::global::GlobalSummary;
use crate::aggregate::insights::Insights;
use crate::aggregate::platform::PlatformSummary;
use crate::aggregate::scatter::ScatterPoint;
use crate::geometry::points::{engagement_bars, point_color};
use crate::geometry::violin::PLATFORM_COLORS;

/// Block glyphs for density sparklines, lowest to highest.
const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Width of the engagement bars in the platform table.
const BAR_WIDTH: f64 = 24.0;

/// Display the four overview cards.
pub fn display_overview(stats: &GlobalSummary) {
    println!("\n{}", "=== Dataset Overview ===".bold());
    println!();
    println!(
        "  {:<16} {:>10}  {}",
        "Total Posts".dimmed(),
        format_thousands(stats.total_posts as u64).bold(),
        "Analyzed entries".dimmed()
    );
    println!(
        "  {:<16} {:>10}  {}",
        "Misinformation".dimmed(),
        format_thousands(stats.misinformation_count as u64).yellow().bold(),
        format!(
            "{} of total",
            format_percent(share_percent(stats.misinformation_count, stats.total_posts))
        )
        .dimmed()
    );
    println!(
        "  {:<16} {:>10}  {}",
        "Avg. Toxicity".dimmed(),
        format_fraction(stats.avg_toxicity).bold(),
        "Mean toxicity score".dimmed()
    );
    println!(
        "  {:<16} {:>10}  {}",
        "Platforms".dimmed(),
        stats.platforms.to_string().bold(),
        "Social networks analyzed".dimmed()
    );
}

/// Display the per-platform table with engagement bars.
pub fn display_platforms(stats: &[PlatformSummary]) {
    println!("\n{}", "=== Platform Analysis ===".bold());
    println!();
    println!(
        "  {:<12} {:>7} {:>10} {:>9} {:>9} {:>9}  {}",
        "Platform".dimmed(),
        "Posts".dimmed(),
        "Avg eng".dimmed(),
        "Avg tox".dimmed(),
        "Misinfo".dimmed(),
        "Sentiment".dimmed(),
        "Engagement".dimmed(),
    );
    println!("  {}", "-".repeat(88).dimmed());

    let bars = engagement_bars(stats, BAR_WIDTH, 1.0);

    for (i, (stat, (_, height))) in stats.iter().zip(bars.iter()).enumerate() {
        let bar = "█".repeat(height.round() as usize);
        println!(
            "  {:<12} {:>7} {:>10.1} {:>9} {:>9} {:>9.2}  {}",
            platform_label(&stat.platform, i),
            format_thousands(stat.total_posts as u64),
            stat.avg_engagement,
            format_fraction(stat.avg_toxicity),
            format_percent(stat.misinformation_rate),
            stat.avg_sentiment,
            platform_label(&bar, i),
        );
    }
}

/// Display each platform's toxicity density as a sparkline with its mean.
pub fn display_toxicity(profiles: &[DensityProfile]) {
    println!("\n{}", "=== Toxicity Distribution ===".bold());
    println!(
        "{}",
        "  Taller glyphs mean more posts at that toxicity level (0% → 100%).".dimmed()
    );
    println!();

    for (i, profile) in profiles.iter().enumerate() {
        println!(
            "  {:<12} {}  {} {}",
            platform_label(&profile.platform, i),
            platform_label(&sparkline(&profile.density), i),
            "mean".dimmed(),
            format_percent(profile.mean).bold(),
        );
    }
}

/// Display the scatter sample as a table, followed by the legend counts.
pub fn display_scatter(points: &[ScatterPoint]) {
    println!(
        "\n{}",
        format!("=== Toxicity vs Engagement ({} points) ===", points.len()).bold()
    );
    println!();

    if points.is_empty() {
        println!("  No data loaded.");
        return;
    }

    println!(
        "  {:>4}  {:<12} {:>8} {:>10} {:>7} {:>7} {:>7}",
        "#".dimmed(),
        "Platform".dimmed(),
        "Toxicity".dimmed(),
        "Eng".dimmed(),
        "x".dimmed(),
        "y".dimmed(),
        "z".dimmed(),
    );
    println!("  {}", "-".repeat(64).dimmed());

    for (i, point) in points.iter().enumerate() {
        let tag = if point.is_misinformation {
            "Misinfo".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:>4}  {:<12} {:>8} {:>10} {:>7.2} {:>7.2} {:>7.2}  {}",
            i + 1,
            point.platform,
            format_fraction(point.toxicity),
            format_thousands(point.engagement),
            point.x,
            point.y,
            point.z,
            tag,
        );
    }

    display_scatter_legend(points);
}

/// Misinformation vs verified counts for the scatter sample.
pub fn display_scatter_legend(points: &[ScatterPoint]) {
    let misinfo = points.iter().filter(|p| p.is_misinformation).count();
    let verified = points.len() - misinfo;
    println!();
    println!(
        "  {} Misinformation: {}    {} Verified: {}",
        colorize_hex("●", point_color(true)),
        misinfo.to_string().bold(),
        colorize_hex("●", point_color(false)),
        verified.to_string().bold(),
    );
}

/// Display the key findings.
pub fn display_insights(insights: &Insights) {
    println!("\n{}", "=== Key Findings ===".bold());
    println!();

    println!(
        "  {} {}",
        "Misinformation Rate".bold(),
        format!("[{} posts]", insights.misinformation_count).yellow()
    );
    println!(
        "    {} of all analyzed posts contain misinformation.",
        format_percent(insights.misinformation_share)
    );
    println!();

    println!(
        "  {} {}",
        "Toxicity Distribution".bold(),
        format!("[{} avg]", format_percent(insights.avg_toxicity_percent)).yellow()
    );
    println!("    Toxicity scores vary by platform; see `toxicity` for the per-platform densities.");
    println!();

    println!(
        "  {} {}",
        "Platform Variance".bold(),
        format!("[{} platforms]", insights.platforms_charted).yellow()
    );
    println!("    Engagement levels differ between platforms; see `platforms` for the breakdown.");
    println!();

    println!(
        "  {} {} misinformation / {} verified in the scatter sample",
        "Scatter".bold(),
        insights.scatter_misinformation,
        insights.scatter_verified
    );
}

/// Render a density array as block glyphs.
pub fn sparkline(density: &[f64]) -> String {
    density
        .iter()
        .map(|d| {
            if *d <= 0.0 {
                ' '
            } else {
                let idx = (d.clamp(0.0, 1.0) * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx]
            }
        })
        .collect()
}

/// Color text with the palette entry for platform `index`.
fn platform_label(text: &str, index: usize) -> ColoredString {
    colorize_hex(text, PLATFORM_COLORS[index % PLATFORM_COLORS.len()])
}

fn colorize_hex(text: &str, hex: &str) -> ColoredString {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}
