//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::{EvaluationResult, FileEvaluation};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a bare evaluation result (the HTTP response shape)
    pub fn report_result(&self, result: &EvaluationResult) -> String {
        self.to_json(result, "{}")
    }

    /// Report a single evaluation with its file path
    pub fn report(&self, evaluation: &FileEvaluation) -> String {
        self.to_json(evaluation, "{}")
    }

    /// Report with summary
    pub fn report_with_summary(
        &self,
        evaluations: &[FileEvaluation],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results: evaluations,
            summary: JsonSummary {
                files_evaluated: stats.files_evaluated,
                average_score: stats.average_score,
                average_level: stats.average_level.to_string(),
                total_words: stats.total_words,
                flagged_inputs: stats.flagged_inputs,
            },
        };
        self.to_json(&output, "{}")
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: &'a [FileEvaluation],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    files_evaluated: usize,
    average_score: u8,
    average_level: String,
    total_words: usize,
    flagged_inputs: usize,
}
