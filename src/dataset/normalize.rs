// Ingestion — turn decoded raw rows into schema-validated `Row`s.
//
// Rows without a usable identifier are dropped silently. Everything else
// is kept in its original order. Known columns are mapped onto typed
// fields; anything else is carried through as-is.

use tracing::debug;

use super::models::{RawRow, Row, Scalar};

/// Column names the `Row` schema recognizes. Anything else goes to `extra`.
const SCHEMA_COLUMNS: &[&str] = &[
    "id",
    "post_id",
    "platform",
    "timestamp",
    "date",
    "time",
    "month",
    "weekday",
    "country",
    "city",
    "timezone",
    "author_id",
    "author_followers",
    "author_verified",
    "text",
    "text_length",
    "token_count",
    "readability_score",
    "num_urls",
    "num_mentions",
    "num_hashtags",
    "sentiment_score",
    "toxicity_score",
    "model_signature",
    "detected_synthetic_score",
    "embedding_sim_to_facts",
    "factcheck_verdict",
    "external_factchecks_count",
    "source_domain_reliability",
    "engagement",
    "is_misinformation",
];

/// Normalize a batch of raw rows, dropping the ones without an identifier.
pub fn normalize(raw_rows: &[RawRow]) -> Vec<Row> {
    let rows: Vec<Row> = raw_rows.iter().filter_map(normalize_row).collect();

    let dropped = raw_rows.len() - rows.len();
    if dropped > 0 {
        debug!(dropped, kept = rows.len(), "Dropped rows without an identifier");
    }

    rows
}

/// Normalize a single raw row. Returns `None` when the `id` cell is
/// missing or blank; any other identifier is kept as decoded.
pub fn normalize_row(raw: &RawRow) -> Option<Row> {
    let id = raw.get("id").filter(|cell| !cell.is_empty())?;

    let mut row = Row::new(
        0,
        &text(raw, "platform").unwrap_or_default(),
        count(raw, "engagement").unwrap_or(0),
        real(raw, "toxicity_score").unwrap_or(0.0),
        real(raw, "sentiment_score").unwrap_or(0.0),
        flag(raw, "is_misinformation").unwrap_or(false),
    );

    row.id = id.clone();
    row.post_id = text(raw, "post_id");
    row.timestamp = text(raw, "timestamp");
    row.date = text(raw, "date");
    row.time = text(raw, "time");
    row.month = text(raw, "month");
    row.weekday = text(raw, "weekday");
    row.country = text(raw, "country");
    row.city = text(raw, "city");
    row.timezone = text(raw, "timezone");
    row.author_id = text(raw, "author_id");
    row.author_followers = count(raw, "author_followers");
    row.author_verified = flag(raw, "author_verified");
    row.text = text(raw, "text");
    row.text_length = count(raw, "text_length");
    row.token_count = count(raw, "token_count");
    row.readability_score = real(raw, "readability_score");
    row.num_urls = count(raw, "num_urls");
    row.num_mentions = count(raw, "num_mentions");
    row.num_hashtags = count(raw, "num_hashtags");
    row.model_signature = text(raw, "model_signature");
    row.detected_synthetic_score = real(raw, "detected_synthetic_score");
    row.embedding_sim_to_facts = real(raw, "embedding_sim_to_facts");
    row.factcheck_verdict = text(raw, "factcheck_verdict");
    row.external_factchecks_count = count(raw, "external_factchecks_count");
    row.source_domain_reliability = real(raw, "source_domain_reliability");

    row.extra = raw
        .fields
        .iter()
        .filter(|(name, _)| !SCHEMA_COLUMNS.contains(&name.as_str()))
        .cloned()
        .collect();

    Some(row)
}

fn text(raw: &RawRow, column: &str) -> Option<String> {
    raw.get(column).and_then(Scalar::as_text)
}

fn real(raw: &RawRow, column: &str) -> Option<f64> {
    raw.get(column).and_then(Scalar::as_f64)
}

/// Non-negative whole count. Negative values are treated as absent.
fn count(raw: &RawRow, column: &str) -> Option<u64> {
    raw.get(column)
        .and_then(Scalar::as_f64)
        .filter(|v| *v >= 0.0)
        .map(|v| v.trunc() as u64)
}

/// Binary flag: only the number 1 counts as set.
fn flag(raw: &RawRow, column: &str) -> Option<bool> {
    raw.get(column)
        .and_then(Scalar::as_f64)
        .map(|v| v == 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fields: &[(&str, Scalar)]) -> RawRow {
        RawRow::new(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn drops_rows_without_id() {
        let rows = normalize(&[
            raw(&[("id", Scalar::Int(1)), ("platform", Scalar::Text("Reddit".into()))]),
            raw(&[("id", Scalar::Empty), ("platform", Scalar::Text("Reddit".into()))]),
            raw(&[("platform", Scalar::Text("Twitter".into()))]),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, Scalar::Int(1));
    }

    #[test]
    fn non_integer_ids_are_kept_as_decoded() {
        let rows = normalize(&[
            raw(&[("id", Scalar::Text("abc".into()))]),
            raw(&[("id", Scalar::Float(1.5))]),
            raw(&[("id", Scalar::Bool(false))]),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, Scalar::Text("abc".into()));
        assert_eq!(rows[1].id, Scalar::Float(1.5));
        assert_eq!(rows[2].id, Scalar::Bool(false));
    }

    #[test]
    fn zero_id_is_kept() {
        let rows = normalize(&[raw(&[("id", Scalar::Int(0))])]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, Scalar::Int(0));
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        let row = normalize_row(&raw(&[("id", Scalar::Int(9))])).unwrap();
        assert_eq!(row.engagement, 0);
        assert_eq!(row.toxicity_score, 0.0);
        assert_eq!(row.sentiment_score, 0.0);
        assert!(!row.is_misinformation);
        assert_eq!(row.platform, "");
    }

    #[test]
    fn misinformation_flag_requires_one() {
        let set = normalize_row(&raw(&[
            ("id", Scalar::Int(1)),
            ("is_misinformation", Scalar::Int(1)),
        ]))
        .unwrap();
        let unset = normalize_row(&raw(&[
            ("id", Scalar::Int(2)),
            ("is_misinformation", Scalar::Bool(true)),
        ]))
        .unwrap();
        assert!(set.is_misinformation);
        assert!(!unset.is_misinformation);
    }

    #[test]
    fn unknown_columns_pass_through_in_order() {
        let row = normalize_row(&raw(&[
            ("zeta", Scalar::Int(3)),
            ("id", Scalar::Int(1)),
            ("alpha", Scalar::Text("x".into())),
        ]))
        .unwrap();
        assert_eq!(
            row.extra,
            vec![
                ("zeta".to_string(), Scalar::Int(3)),
                ("alpha".to_string(), Scalar::Text("x".into())),
            ]
        );
    }
}
