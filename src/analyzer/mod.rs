//! Analyzer module - text evaluation engine

pub mod engine;
pub mod narrative;
pub mod scoring;
pub mod signals;
pub mod stats;
pub mod tokenizer;

pub use engine::{AggregateStats, EvaluationEngine};
pub use scoring::{FeedbackCheck, ScoreCalculator};
pub use signals::{KeywordCategory, KeywordLists};
pub use tokenizer::tokenize;
