//! mediascore: heuristic content review for marketing copy
//!
//! This library scores short texts for clarity, credibility and compliance risk
//! and explains the score with strengths, weaknesses and advisory notes.

pub mod analyzer;
pub mod config;
pub mod media;
pub mod reporter;

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MESSAGE_TYPE: &str = "general";
pub const DEFAULT_CHANNEL: &str = "social";
pub const DEFAULT_AUDIENCE: &str = "general";

/// Input to a single evaluation.
///
/// Deserialization is lenient: `text` falls back to `content`, and any field
/// that is missing, `null` or not a string takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEvaluationRequest")]
pub struct EvaluationRequest {
    /// Message copy to evaluate (untrimmed)
    pub text: String,
    /// Kind of message, e.g. "promotion" or "announcement"
    pub message_type: String,
    /// Publication channel, e.g. "social" or "email"
    pub channel: String,
    /// Intended audience
    pub audience: String,
}

impl EvaluationRequest {
    /// Request for `text` with default metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            message_type: DEFAULT_MESSAGE_TYPE.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    pub fn with_message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = or_default(Some(message_type.into()), DEFAULT_MESSAGE_TYPE);
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = or_default(Some(channel.into()), DEFAULT_CHANNEL);
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = or_default(Some(audience.into()), DEFAULT_AUDIENCE);
        self
    }
}

impl Default for EvaluationRequest {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Wire shape of an evaluation request before defaults are applied
#[derive(Debug, Default, Deserialize)]
struct RawEvaluationRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    text: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    content: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    message_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    channel: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    audience: Option<String>,
}

impl From<RawEvaluationRequest> for EvaluationRequest {
    fn from(raw: RawEvaluationRequest) -> Self {
        let text = raw
            .text
            .filter(|t| !t.is_empty())
            .or(raw.content)
            .unwrap_or_default();
        Self {
            text,
            message_type: or_default(raw.message_type, DEFAULT_MESSAGE_TYPE),
            channel: or_default(raw.channel, DEFAULT_CHANNEL),
            audience: or_default(raw.audience, DEFAULT_AUDIENCE),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Accept any JSON value; keep it only when it is a string
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Word and sentence statistics of the evaluated text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Number of tokens
    pub word_count: usize,
    /// Number of sentence terminators (at least 1)
    pub sentence_count: usize,
    /// word_count / sentence_count, rounded to 2 decimals
    pub avg_words_per_sentence: f64,
}

impl Default for TextStatistics {
    fn default() -> Self {
        Self {
            word_count: 0,
            sentence_count: 1,
            avg_words_per_sentence: 0.0,
        }
    }
}

/// Number of distinct keyword phrases found per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    pub absolute_claim_hits: usize,
    pub sensitive_hits: usize,
    pub privacy_hits: usize,
}

impl SignalCounts {
    pub fn total(&self) -> usize {
        self.absolute_claim_hits + self.sensitive_hits + self.privacy_hits
    }
}

/// Sub-scores and the overall score derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Readability (40-95)
    pub clarity: u8,
    /// Absence of exaggerated claims (35-95)
    pub credibility: u8,
    /// Regulatory / privacy exposure, higher is worse (0-95)
    pub compliance_risk: u8,
    /// Mean of clarity, credibility and inverted risk (0-100)
    pub overall_score: u8,
}

/// Five-tier qualitative band of the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RubricLevel {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl RubricLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => RubricLevel::Excellent,
            70..=84 => RubricLevel::VeryGood,
            55..=69 => RubricLevel::Good,
            40..=54 => RubricLevel::Fair,
            _ => RubricLevel::Poor,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RubricLevel::Excellent => {
                "Publication-ready copy with clear wording and low compliance risk."
            }
            RubricLevel::VeryGood => "Strong copy that needs only minor refinements.",
            RubricLevel::Good => "Solid base; address the listed weaknesses before publishing.",
            RubricLevel::Fair => "Needs revision for clarity, credibility or compliance before use.",
            RubricLevel::Poor => "High-risk or unclear copy that should be rewritten.",
        }
    }
}

impl std::fmt::Display for RubricLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RubricLevel::Excellent => write!(f, "Excellent"),
            RubricLevel::VeryGood => write!(f, "Very Good"),
            RubricLevel::Good => write!(f, "Good"),
            RubricLevel::Fair => write!(f, "Fair"),
            RubricLevel::Poor => write!(f, "Poor"),
        }
    }
}

/// Rubric band with its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub level: RubricLevel,
    pub description: String,
}

impl Rubric {
    pub fn for_score(score: u8) -> Self {
        let level = RubricLevel::from_score(score);
        Self {
            level,
            description: level.description().to_string(),
        }
    }
}

/// The full result of evaluating one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall score (0-100)
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Fifteen numbered advisory notes (empty for empty input)
    pub detailed_analysis: Vec<String>,
    /// Narrative summary
    pub paragraph: String,
    pub stats: TextStatistics,
    pub rubric: Rubric,
    /// Sub-scores (absent for empty input)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    /// Keyword hits (absent for empty input)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signals: Option<SignalCounts>,
}

impl EvaluationResult {
    /// Whether the evaluation produced any weakness
    pub fn is_flagged(&self) -> bool {
        !self.weaknesses.is_empty()
    }
}

/// An evaluation tied to the input it came from (file path, `-` for stdin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEvaluation {
    pub file_path: PathBuf,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

/// Public API: evaluate a text file with the config found from `work_dir`.
///
/// * `path` - file holding the message copy
/// * `work_dir` - directory where the `.mediascorerc.json` search starts
/// * `config_path` - explicit config file; if None, searches from work_dir
pub fn evaluate_file(
    path: &std::path::Path,
    work_dir: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<FileEvaluation> {
    let config = crate::config::load_config(work_dir, config_path)?;
    let engine = crate::analyzer::EvaluationEngine::from_config(&config);
    engine.evaluate_path(path, &EvaluationRequest::default())
}
