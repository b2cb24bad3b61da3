//! Evaluation engine - runs the stages in order

use crate::config::Config;
use crate::{
    EvaluationRequest, EvaluationResult, FileEvaluation, Rubric, RubricLevel, TextStatistics,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::narrative::{self, EMPTY_PARAGRAPH};
use super::signals::KeywordLists;
use super::stats::extract_stats;
use super::ScoreCalculator;

/// Weakness reported for empty or whitespace-only input
pub const EMPTY_INPUT_WEAKNESS: &str = "Empty input text";

/// Main evaluation engine.
///
/// Holds only the keyword lists, which never change after construction, so one
/// engine can be shared by reference across threads.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    keywords: KeywordLists,
}

impl EvaluationEngine {
    /// Create an engine with the built-in keyword lists
    pub fn new() -> Self {
        Self {
            keywords: KeywordLists::builtin(),
        }
    }

    /// Replace the keyword lists
    pub fn with_keywords(mut self, keywords: KeywordLists) -> Self {
        self.keywords = keywords;
        self
    }

    /// Create an engine with the keyword lists described by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_keywords(config.keyword_lists())
    }

    pub fn keywords(&self) -> &KeywordLists {
        &self.keywords
    }

    /// Evaluate a request
    pub fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult {
        let text = request.text.trim();
        if text.is_empty() {
            debug!("empty input, returning canonical empty result");
            return Self::empty_result();
        }

        let stats = extract_stats(text);
        let signals = self.keywords.detect(text);
        let breakdown = ScoreCalculator::calculate(&stats, &signals);
        let (strengths, weaknesses) = ScoreCalculator::feedback(&stats, &signals);

        debug!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            absolute_claims = signals.absolute_claim_hits,
            sensitive = signals.sensitive_hits,
            privacy = signals.privacy_hits,
            cues = signals.total(),
            score = breakdown.overall_score,
            "evaluated text"
        );

        EvaluationResult {
            score: breakdown.overall_score,
            strengths,
            weaknesses,
            detailed_analysis: narrative::detailed_analysis(&breakdown, &signals, request),
            paragraph: narrative::paragraph(&stats, &signals, breakdown.overall_score),
            stats,
            rubric: ScoreCalculator::rubric(breakdown.overall_score),
            breakdown: Some(breakdown),
            signals: Some(signals),
        }
    }

    /// Evaluate text with default metadata
    pub fn evaluate_text(&self, text: &str) -> EvaluationResult {
        self.evaluate(&EvaluationRequest::new(text))
    }

    /// Result for empty or whitespace-only input
    pub fn empty_result() -> EvaluationResult {
        EvaluationResult {
            score: 0,
            strengths: Vec::new(),
            weaknesses: vec![EMPTY_INPUT_WEAKNESS.to_string()],
            detailed_analysis: Vec::new(),
            paragraph: EMPTY_PARAGRAPH.to_string(),
            stats: TextStatistics::default(),
            rubric: Rubric::for_score(0),
            breakdown: None,
            signals: None,
        }
    }

    /// Read a file and evaluate its content with the metadata of `template`
    pub fn evaluate_path(
        &self,
        path: &Path,
        template: &EvaluationRequest,
    ) -> Result<FileEvaluation> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        let request = EvaluationRequest {
            text,
            ..template.clone()
        };
        Ok(FileEvaluation {
            file_path: path.to_path_buf(),
            result: self.evaluate(&request),
        })
    }

    /// Calculate aggregate statistics across evaluations
    pub fn aggregate_stats(results: &[FileEvaluation]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = results.iter().map(|r| r.result.score as u32).sum();
        let average_score = (total_score / results.len() as u32) as u8;

        let total_words: usize = results.iter().map(|r| r.result.stats.word_count).sum();
        let flagged_inputs = results.iter().filter(|r| r.result.is_flagged()).count();

        AggregateStats {
            files_evaluated: results.len(),
            average_score,
            average_level: RubricLevel::from_score(average_score),
            total_words,
            flagged_inputs,
        }
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple evaluations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateStats {
    /// Number of inputs evaluated
    pub files_evaluated: usize,
    /// Integer mean of the scores
    pub average_score: u8,
    /// Rubric level of the average score
    pub average_level: RubricLevel,
    /// Words across all inputs
    pub total_words: usize,
    /// Inputs with at least one weakness
    pub flagged_inputs: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_evaluated: 0,
            average_score: 0,
            average_level: RubricLevel::Poor,
            total_words: 0,
            flagged_inputs: 0,
        }
    }
}
