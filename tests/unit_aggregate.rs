// Unit tests for the aggregation engine.
//
// Tests the pure query functions: per-platform summaries, the global
// summary, density profiles and the scatter sample, including the
// stable-cardinality and zero-guard properties.

use misinfo_atlas::aggregate::density::{toxicity_distribution, DENSITY_BINS};
use misinfo_atlas::aggregate::global::total_stats;
use misinfo_atlas::aggregate::platform::platform_stats;
use misinfo_atlas::aggregate::scatter::{scatter_data, scatter_with_jitter, Jitter};
use misinfo_atlas::aggregate::{snapshot, AggregateConfig};
use misinfo_atlas::dataset::Row;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn platforms() -> Vec<String> {
    AggregateConfig::default().platforms
}

fn scenario_rows() -> Vec<Row> {
    vec![
        Row::new(1, "Reddit", 100, 0.2, 0.0, false),
        Row::new(2, "Reddit", 300, 0.8, 0.0, true),
        Row::new(3, "Twitter", 50, 0.5, 0.0, false),
    ]
}

// ============================================================
// Three-row scenario
// ============================================================

#[test]
fn scenario_total_stats() {
    let total = total_stats(&scenario_rows());
    assert_eq!(total.total_posts, 3);
    assert_eq!(total.misinformation_count, 1);
    assert!((total.avg_toxicity - 0.5).abs() < 1e-10);
    assert!((total.avg_engagement - 150.0).abs() < 1e-10);
    assert_eq!(total.platforms, 2);
}

#[test]
fn scenario_platform_stats() {
    let stats = platform_stats(&scenario_rows(), &platforms());
    assert_eq!(stats.len(), 4);

    let reddit = &stats[0];
    assert_eq!(reddit.platform, "Reddit");
    assert_eq!(reddit.total_posts, 2);
    assert!((reddit.avg_engagement - 200.0).abs() < 1e-10);
    assert!((reddit.avg_toxicity - 0.5).abs() < 1e-10);
    assert!((reddit.misinformation_rate - 50.0).abs() < 1e-10);

    let twitter = &stats[1];
    assert_eq!(twitter.platform, "Twitter");
    assert!((twitter.avg_engagement - 50.0).abs() < 1e-10);
    assert!((twitter.avg_toxicity - 0.5).abs() < 1e-10);
    assert_eq!(twitter.misinformation_rate, 0.0);

    for empty in &stats[2..] {
        assert_eq!(empty.total_posts, 0);
        assert_eq!(empty.avg_engagement, 0.0);
        assert_eq!(empty.avg_toxicity, 0.0);
        assert_eq!(empty.avg_sentiment, 0.0);
        assert_eq!(empty.misinformation_rate, 0.0);
    }
    assert_eq!(stats[2].platform, "Facebook");
    assert_eq!(stats[3].platform, "Telegram");
}

// ============================================================
// platform_stats — cardinality and ordering
// ============================================================

#[test]
fn platform_stats_on_empty_rows_has_one_entry_per_platform() {
    let stats = platform_stats(&[], &platforms());
    let names: Vec<&str> = stats.iter().map(|s| s.platform.as_str()).collect();
    assert_eq!(names, vec!["Reddit", "Twitter", "Facebook", "Telegram"]);
}

#[test]
fn platform_stats_follows_configured_order() {
    let list = vec!["Telegram".to_string(), "Reddit".to_string()];
    let stats = platform_stats(&scenario_rows(), &list);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].platform, "Telegram");
    assert_eq!(stats[0].total_posts, 0);
    assert_eq!(stats[1].platform, "Reddit");
    assert_eq!(stats[1].total_posts, 2);
}

#[test]
fn platform_counts_never_exceed_row_count() {
    let mut rows = scenario_rows();
    rows.push(Row::new(4, "Mastodon", 10, 0.1, 0.0, false));

    let stats = platform_stats(&rows, &platforms());
    let counted: usize = stats.iter().map(|s| s.total_posts).sum();
    assert_eq!(counted, 3);
    assert!(counted <= rows.len());

    let stats = platform_stats(&scenario_rows(), &platforms());
    let counted: usize = stats.iter().map(|s| s.total_posts).sum();
    assert_eq!(counted, scenario_rows().len());
}

#[test]
fn platform_match_is_exact() {
    let rows = vec![Row::new(1, "reddit", 100, 0.5, 0.0, false)];
    let stats = platform_stats(&rows, &platforms());
    assert_eq!(stats[0].total_posts, 0);
}

// ============================================================
// total_stats — observed platform diversity
// ============================================================

#[test]
fn total_platforms_can_exceed_fixed_list() {
    let rows: Vec<Row> = ["Reddit", "Twitter", "Facebook", "Telegram", "Gab"]
        .iter()
        .enumerate()
        .map(|(i, p)| Row::new(i as i64, p, 0, 0.0, 0.0, false))
        .collect();
    assert_eq!(total_stats(&rows).platforms, 5);
}

#[test]
fn total_platforms_can_be_fewer_than_fixed_list() {
    let rows = vec![Row::new(1, "Telegram", 0, 0.0, 0.0, false)];
    assert_eq!(total_stats(&rows).platforms, 1);
}

// ============================================================
// toxicity_distribution
// ============================================================

#[test]
fn density_peaks_at_one_for_non_empty_platforms() {
    let profiles = toxicity_distribution(&scenario_rows(), &platforms());
    assert_eq!(profiles.len(), 4);

    for profile in &profiles[..2] {
        assert_eq!(profile.density.len(), DENSITY_BINS);
        let max = profile.density.iter().copied().fold(0.0_f64, f64::max);
        assert_eq!(max, 1.0);
    }
}

#[test]
fn density_is_zero_for_empty_platforms() {
    let profiles = toxicity_distribution(&scenario_rows(), &platforms());
    for profile in &profiles[2..] {
        assert_eq!(profile.density.len(), DENSITY_BINS);
        assert!(profile.density.iter().all(|&d| d == 0.0));
        assert_eq!(profile.mean, 0.0);
    }
}

#[test]
fn density_bins_and_mean_for_reddit() {
    let profiles = toxicity_distribution(&scenario_rows(), &platforms());
    let reddit = &profiles[0];
    // 0.2 → 20% → bin 4; 0.8 → 80% → bin 16
    assert_eq!(reddit.density[4], 1.0);
    assert_eq!(reddit.density[16], 1.0);
    assert_eq!(reddit.density.iter().filter(|&&d| d > 0.0).count(), 2);
    assert!((reddit.mean - 50.0).abs() < 1e-10);
}

#[test]
fn full_toxicity_lands_in_last_bin() {
    let rows = vec![Row::new(1, "Reddit", 0, 1.0, 0.0, false)];
    let profiles = toxicity_distribution(&rows, &platforms());
    assert_eq!(profiles[0].density[DENSITY_BINS - 1], 1.0);
    assert!((profiles[0].mean - 100.0).abs() < 1e-10);
}

// ============================================================
// scatter_data
// ============================================================

fn many_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new(
                i as i64,
                if i % 2 == 0 { "Reddit" } else { "Twitter" },
                (i * 37) as u64,
                (i % 11) as f64 / 10.0,
                0.0,
                i % 3 == 0,
            )
        })
        .collect()
}

#[test]
fn scatter_length_is_capped_at_limit() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(scatter_data(&many_rows(500), 200, &mut rng).len(), 200);
    assert_eq!(scatter_data(&many_rows(42), 200, &mut rng).len(), 42);
    assert!(scatter_data(&[], 200, &mut rng).is_empty());
}

#[test]
fn scatter_never_exceeds_two_hundred_points() {
    let rows = many_rows(300);
    let mut rng = StdRng::seed_from_u64(6);
    assert_eq!(scatter_data(&rows, 500, &mut rng).len(), 200);

    let config = AggregateConfig {
        scatter_limit: 500,
        jitter: Jitter::Seeded(6),
        ..AggregateConfig::default()
    };
    assert_eq!(snapshot(&rows, &config).scatter.len(), 200);
}

#[test]
fn scatter_preserves_row_order_and_fields() {
    let rows = many_rows(250);
    let mut rng = StdRng::seed_from_u64(2);
    let points = scatter_data(&rows, 200, &mut rng);
    for (point, row) in points.iter().zip(rows.iter()) {
        assert_eq!(point.platform, row.platform);
        assert_eq!(point.engagement, row.engagement);
        assert_eq!(point.toxicity, row.toxicity_score);
        assert_eq!(point.is_misinformation, row.is_misinformation);
    }
}

#[test]
fn scatter_coordinates_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for point in scatter_data(&many_rows(300), 200, &mut rng) {
        assert!((-2.0..=2.0).contains(&point.x), "x out of range: {}", point.x);
        assert!((-1.0..=1.0).contains(&point.z), "z out of range: {}", point.z);
    }
}

#[test]
fn scatter_exact_x_and_y() {
    let rows = scenario_rows();
    let mut rng = StdRng::seed_from_u64(4);
    let points = scatter_data(&rows, 200, &mut rng);
    // x = tox * 4 - 2; y = eng / 10000 * 3 - 1
    assert!((points[0].x - -1.2).abs() < 1e-10);
    assert!((points[0].y - -0.97).abs() < 1e-10);
    assert!((points[1].x - 1.2).abs() < 1e-10);
    assert!((points[1].y - -0.91).abs() < 1e-10);
    assert!((points[2].x - 0.0).abs() < 1e-10);
    assert!((points[2].y - -0.985).abs() < 1e-10);
}

#[test]
fn scatter_y_is_not_clamped() {
    let rows = vec![Row::new(1, "Reddit", 50_000, 0.5, 0.0, false)];
    let mut rng = StdRng::seed_from_u64(5);
    let points = scatter_data(&rows, 200, &mut rng);
    assert!((points[0].y - 14.0).abs() < 1e-10);
}

#[test]
fn random_jitter_keeps_x_and_y_stable() {
    let rows = many_rows(50);
    let a = scatter_with_jitter(&rows, 200, &Jitter::Random);
    let b = scatter_with_jitter(&rows, 200, &Jitter::Random);
    for (p, q) in a.iter().zip(b.iter()) {
        assert_eq!(p.x, q.x);
        assert_eq!(p.y, q.y);
        assert!((-1.0..=1.0).contains(&p.z));
    }
}

// ============================================================
// Idempotence
// ============================================================

#[test]
fn queries_are_idempotent() {
    let rows = many_rows(120);
    let config = AggregateConfig {
        jitter: Jitter::Seeded(99),
        ..AggregateConfig::default()
    };
    assert_eq!(snapshot(&rows, &config), snapshot(&rows, &config));
    assert_eq!(total_stats(&rows), total_stats(&rows));
    assert_eq!(
        platform_stats(&rows, &config.platforms),
        platform_stats(&rows, &config.platforms)
    );
    assert_eq!(
        toxicity_distribution(&rows, &config.platforms),
        toxicity_distribution(&rows, &config.platforms)
    );
}
