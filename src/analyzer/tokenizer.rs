//! Word tokenizer for Latin and Arabic-script text

use regex::Regex;
use std::sync::OnceLock;

/// ASCII letters and digits plus the Arabic block (U+0600..U+06FF)
const TOKEN_PATTERN: &str = r"[A-Za-z0-9\x{0600}-\x{06FF}]+";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).unwrap())
}

/// Split `text` into lowercase tokens. Any character outside the token class separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Token count without allocating the tokens
pub fn count_tokens(text: &str) -> usize {
    token_regex().find_iter(&text.to_lowercase()).count()
}
