//! Keyword signal detection.
//!
//! Matching is plain substring containment on the lowercased text, so a phrase
//! also matches inside longer words ("child" in "children", "best" in "bestseller").
//! Each phrase counts at most once per text.

use crate::SignalCounts;

/// Exaggerated or guarantee-style claims
pub const ABSOLUTE_CLAIMS: &[&str] = &[
    "guarantee",
    "100%",
    "always",
    "never",
    "best",
    "no risk",
    "miracle",
    "مضمون",
    "نهائي",
    "بدون أي",
    "مستحيل",
    "أضمن",
    "ضمان",
];

/// Regulated or vulnerable-audience topics
pub const SENSITIVE_DOMAINS: &[&str] = &[
    "kids",
    "children",
    "child",
    "أطفال",
    "قاصر",
    "health",
    "دواء",
    "مرض",
    "investment",
    "استثمار",
    "ربح",
];

/// Personal contact data markers
pub const PRIVACY_CUES: &[&str] = &[
    "phone", "email", "address", "رقم", "هاتف", "عنوان", "@", "واتساب", "whatsapp",
];

/// Keyword category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    AbsoluteClaims,
    SensitiveDomain,
    Privacy,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 3] = [
        KeywordCategory::AbsoluteClaims,
        KeywordCategory::SensitiveDomain,
        KeywordCategory::Privacy,
    ];

    /// Built-in phrases for this category
    pub fn builtin(&self) -> &'static [&'static str] {
        match self {
            KeywordCategory::AbsoluteClaims => ABSOLUTE_CLAIMS,
            KeywordCategory::SensitiveDomain => SENSITIVE_DOMAINS,
            KeywordCategory::Privacy => PRIVACY_CUES,
        }
    }
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordCategory::AbsoluteClaims => write!(f, "absolute-claims"),
            KeywordCategory::SensitiveDomain => write!(f, "sensitive-domain"),
            KeywordCategory::Privacy => write!(f, "privacy"),
        }
    }
}

/// The three phrase lists used by the detector.
///
/// Built once (built-ins plus configured extras) and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLists {
    absolute_claims: Vec<String>,
    sensitive: Vec<String>,
    privacy: Vec<String>,
}

impl KeywordLists {
    /// Built-in lists only
    pub fn builtin() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            absolute_claims: owned(ABSOLUTE_CLAIMS),
            sensitive: owned(SENSITIVE_DOMAINS),
            privacy: owned(PRIVACY_CUES),
        }
    }

    /// Append extra phrases to a category. Phrases are trimmed and lowercased;
    /// blanks and phrases already present are skipped.
    pub fn with_extra<I, S>(mut self, category: KeywordCategory, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.list_mut(category);
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !list.contains(&phrase) {
                list.push(phrase);
            }
        }
        self
    }

    pub fn phrases(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::AbsoluteClaims => &self.absolute_claims,
            KeywordCategory::SensitiveDomain => &self.sensitive,
            KeywordCategory::Privacy => &self.privacy,
        }
    }

    fn list_mut(&mut self, category: KeywordCategory) -> &mut Vec<String> {
        match category {
            KeywordCategory::AbsoluteClaims => &mut self.absolute_claims,
            KeywordCategory::SensitiveDomain => &mut self.sensitive,
            KeywordCategory::Privacy => &mut self.privacy,
        }
    }

    /// Count hits for all three categories
    pub fn detect(&self, text: &str) -> SignalCounts {
        let lowered = text.to_lowercase();
        SignalCounts {
            absolute_claim_hits: count_hits(&lowered, &self.absolute_claims),
            sensitive_hits: count_hits(&lowered, &self.sensitive),
            privacy_hits: count_hits(&lowered, &self.privacy),
        }
    }
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Number of phrases that occur in `lowered_text` (already lowercased)
pub fn count_hits<S: AsRef<str>>(lowered_text: &str, phrases: &[S]) -> usize {
    phrases
        .iter()
        .filter(|p| lowered_text.contains(p.as_ref()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hits_for_neutral_text() {
        let lists = KeywordLists::builtin();
        let counts = lists.detect("Fresh bread every Saturday morning.");
        assert_eq!(counts, SignalCounts::default());
    }

    #[test]
    fn test_substring_matches_inside_longer_words() {
        let lists = KeywordLists::builtin();
        // "guarantee" in "guaranteed", "100%", "never"
        let counts = lists.detect("This is guaranteed to work 100% and never fails for kids.");
        assert_eq!(counts.absolute_claim_hits, 3);
        assert_eq!(counts.sensitive_hits, 1);
        assert_eq!(counts.privacy_hits, 0);
    }

    #[test]
    fn test_overlapping_phrases_each_count() {
        let lists = KeywordLists::builtin();
        // "child", "children" and "health" (inside "healthy")
        let counts = lists.detect("Children love our healthy snacks!");
        assert_eq!(counts.sensitive_hits, 3);
    }

    #[test]
    fn test_each_phrase_counts_once() {
        let lists = KeywordLists::builtin();
        let counts = lists.detect("best best best");
        assert_eq!(counts.absolute_claim_hits, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let lists = KeywordLists::builtin();
        let counts = lists.detect("Contact us via WhatsApp or EMAIL");
        assert_eq!(counts.privacy_hits, 2);
    }

    #[test]
    fn test_arabic_phrases() {
        let lists = KeywordLists::builtin();
        let counts = lists.detect("عرض مضمون للأطفال! اتصل على رقم الهاتف");
        assert_eq!(counts.absolute_claim_hits, 1);
        assert_eq!(counts.sensitive_hits, 1);
        assert_eq!(counts.privacy_hits, 2);
    }

    #[test]
    fn test_multiword_phrase() {
        let lists = KeywordLists::builtin();
        assert_eq!(lists.detect("zero risk").absolute_claim_hits, 0);
        assert_eq!(lists.detect("No Risk at all").absolute_claim_hits, 1);
    }

    #[test]
    fn test_with_extra_normalizes_and_dedups() {
        let lists = KeywordLists::builtin().with_extra(
            KeywordCategory::AbsoluteClaims,
            ["  Unbeatable ", "BEST", "", "unbeatable"],
        );
        let phrases = lists.phrases(KeywordCategory::AbsoluteClaims);
        assert_eq!(phrases.len(), ABSOLUTE_CLAIMS.len() + 1);
        assert_eq!(phrases.last().map(String::as_str), Some("unbeatable"));
        assert_eq!(lists.detect("An UNBEATABLE deal").absolute_claim_hits, 1);
    }

    #[test]
    fn test_builtin_lists_are_disjoint() {
        for a in KeywordCategory::ALL {
            for b in KeywordCategory::ALL {
                if a == b {
                    continue;
                }
                for phrase in a.builtin() {
                    assert!(!b.builtin().contains(phrase), "{} in {} and {}", phrase, a, b);
                }
            }
        }
    }

    #[test]
    fn test_count_hits_on_empty_text() {
        assert_eq!(count_hits("", ABSOLUTE_CLAIMS), 0);
    }
}
