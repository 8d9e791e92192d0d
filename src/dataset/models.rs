// Data models — the typed shapes that flow from the record source into
// the aggregation layer.
//
// A `RawRow` is what the decoder produces: column names paired with
// auto-typed cells. A `Row` is the schema-validated record built from it
// during normalization. Columns the schema doesn't know about ride along
// untouched in `Row::extra`.

use serde::{Deserialize, Serialize};

/// A single decoded cell.
///
/// The decoder types each cell once (integer, then float, then boolean,
/// otherwise text). Missing or blank cells are `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Empty,
}

impl Scalar {
    /// Type a raw cell the way the record source does.
    pub fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Scalar::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Scalar::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Scalar::Float(f);
            }
        }
        match trimmed {
            "true" | "TRUE" | "True" => Scalar::Bool(true),
            "false" | "FALSE" | "False" => Scalar::Bool(false),
            _ => Scalar::Text(cell.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Empty)
    }

    /// Numeric view of the cell. Text, booleans and empty cells have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// String view of the cell. Numbers are rendered back to text so a
    /// numeric-looking identifier (e.g. a post id of `1042`) survives.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Int(i) => Some(i.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Empty => None,
        }
    }
}

/// One decoded record: `(column, cell)` pairs in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub fields: Vec<(String, Scalar)>,
}

impl RawRow {
    pub fn new(fields: Vec<(String, Scalar)>) -> Self {
        Self { fields }
    }

    /// Look up a cell by column name. Returns `None` when the column is
    /// missing entirely; an empty cell comes back as `Some(Scalar::Empty)`.
    pub fn get(&self, column: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_empty())
    }
}

/// One observed social-media post.
///
/// The first six fields are what the aggregation layer consumes. The
/// descriptive metadata is kept for display and export but never read by
/// the statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Identifier cell exactly as decoded. Never `Scalar::Empty`.
    pub id: Scalar,
    /// Platform name. Empty when the dataset left the cell blank.
    pub platform: String,
    pub engagement: u64,
    /// Toxicity score, 0.0 (benign) to 1.0 (very toxic)
    pub toxicity_score: f64,
    pub sentiment_score: f64,
    pub is_misinformation: bool,

    pub post_id: Option<String>,
    pub timestamp: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub month: Option<String>,
    pub weekday: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub author_id: Option<String>,
    pub author_followers: Option<u64>,
    pub author_verified: Option<bool>,
    pub text: Option<String>,
    pub text_length: Option<u64>,
    pub token_count: Option<u64>,
    pub readability_score: Option<f64>,
    pub num_urls: Option<u64>,
    pub num_mentions: Option<u64>,
    pub num_hashtags: Option<u64>,
    pub model_signature: Option<String>,
    pub detected_synthetic_score: Option<f64>,
    pub embedding_sim_to_facts: Option<f64>,
    pub factcheck_verdict: Option<String>,
    pub external_factchecks_count: Option<u64>,
    pub source_domain_reliability: Option<f64>,

    /// Columns outside the schema, in their original order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, Scalar)>,
}

impl Row {
    /// A row carrying only the fields the aggregation layer reads.
    /// Metadata is left empty.
    pub fn new(
        id: i64,
        platform: &str,
        engagement: u64,
        toxicity_score: f64,
        sentiment_score: f64,
        is_misinformation: bool,
    ) -> Self {
        Self {
            id: Scalar::Int(id),
            platform: platform.to_string(),
            engagement,
            toxicity_score,
            sentiment_score,
            is_misinformation,
            post_id: None,
            timestamp: None,
            date: None,
            time: None,
            month: None,
            weekday: None,
            country: None,
            city: None,
            timezone: None,
            author_id: None,
            author_followers: None,
            author_verified: None,
            text: None,
            text_length: None,
            token_count: None,
            readability_score: None,
            num_urls: None,
            num_mentions: None,
            num_hashtags: None,
            model_signature: None,
            detected_synthetic_score: None,
            embedding_sim_to_facts: None,
            factcheck_verdict: None,
            external_factchecks_count: None,
            source_domain_reliability: None,
            extra: Vec::new(),
        }
    }
}
