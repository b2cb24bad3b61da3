//! Word and sentence statistics

use super::tokenizer::count_tokens;
use crate::TextStatistics;

/// Characters that end a sentence: `.`, `!`, `?`, the Arabic question mark and newline
pub const SENTENCE_TERMINATORS: [char; 5] = ['.', '!', '?', '\u{061F}', '\n'];

/// Extract statistics from `text`. The sentence count is floored at 1.
pub fn extract_stats(text: &str) -> TextStatistics {
    let word_count = count_tokens(text);
    let sentence_count = count_sentences(text);
    TextStatistics {
        word_count,
        sentence_count,
        avg_words_per_sentence: round2(word_count as f64 / sentence_count as f64),
    }
}

/// Number of sentence terminators in `text`, at least 1
pub fn count_sentences(text: &str) -> usize {
    text.chars()
        .filter(|c| SENTENCE_TERMINATORS.contains(c))
        .count()
        .max(1)
}

/// Round to 2 decimal places, halves to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
