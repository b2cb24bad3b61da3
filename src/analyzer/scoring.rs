//! Score calculation for message copy

use crate::{Rubric, ScoreBreakdown, SignalCounts, TextStatistics};

const CLARITY_BASE: i64 = 90;
const CLARITY_PER_AVG_WORD: f64 = 2.0;
const CLARITY_MIN: i64 = 40;
const CLARITY_MAX: i64 = 95;

const CREDIBILITY_BASE: i64 = 85;
const CREDIBILITY_PER_CLAIM: i64 = 10;
const CREDIBILITY_MIN: i64 = 35;
const CREDIBILITY_MAX: i64 = 95;

/// Every non-empty text starts with this much risk
const RISK_BASE: i64 = 20;
const RISK_PER_CLAIM: i64 = 15;
const RISK_PER_SENSITIVE: i64 = 10;
const RISK_PER_PRIVACY: i64 = 10;
const RISK_MIN: i64 = 0;
const RISK_MAX: i64 = 95;

/// Texts with fewer words are reported as too short
pub const MIN_WORDS: usize = 25;

/// Score at which the narrative calls the profile "strong"
pub const STRONG_PROFILE_SCORE: u8 = 70;

/// Calculator for the sub-scores and the overall score
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Readability from sentence length: 90 minus twice the average (truncated), in 40..=95
    pub fn clarity(avg_words_per_sentence: f64) -> u8 {
        let penalty = (avg_words_per_sentence * CLARITY_PER_AVG_WORD) as i64;
        (CLARITY_BASE - penalty).clamp(CLARITY_MIN, CLARITY_MAX) as u8
    }

    /// 85 minus 10 per absolute claim, in 35..=95
    pub fn credibility(absolute_claim_hits: usize) -> u8 {
        let hits = absolute_claim_hits.min(i64::MAX as usize) as i64;
        CREDIBILITY_BASE
            .saturating_sub(hits.saturating_mul(CREDIBILITY_PER_CLAIM))
            .clamp(CREDIBILITY_MIN, CREDIBILITY_MAX) as u8
    }

    /// 20 plus 15 per claim and 10 per sensitive or privacy cue, in 0..=95
    pub fn compliance_risk(signals: &SignalCounts) -> u8 {
        let weighted = |hits: usize, weight: i64| (hits.min(i64::MAX as usize) as i64).saturating_mul(weight);
        RISK_BASE
            .saturating_add(weighted(signals.absolute_claim_hits, RISK_PER_CLAIM))
            .saturating_add(weighted(signals.sensitive_hits, RISK_PER_SENSITIVE))
            .saturating_add(weighted(signals.privacy_hits, RISK_PER_PRIVACY))
            .clamp(RISK_MIN, RISK_MAX) as u8
    }

    /// Integer mean of clarity, credibility and the inverted risk
    pub fn overall(clarity: u8, credibility: u8, compliance_risk: u8) -> u8 {
        let sum = clarity as u32 + credibility as u32 + (100 - compliance_risk.min(100)) as u32;
        (sum / 3).min(100) as u8
    }

    /// Calculate the full breakdown from statistics and signals
    pub fn calculate(stats: &TextStatistics, signals: &SignalCounts) -> ScoreBreakdown {
        let clarity = Self::clarity(stats.avg_words_per_sentence);
        let credibility = Self::credibility(signals.absolute_claim_hits);
        let compliance_risk = Self::compliance_risk(signals);
        ScoreBreakdown {
            clarity,
            credibility,
            compliance_risk,
            overall_score: Self::overall(clarity, credibility, compliance_risk),
        }
    }

    /// Rubric band for a score
    pub fn rubric(score: u8) -> Rubric {
        Rubric::for_score(score)
    }

    /// Strengths and weaknesses, in check order
    pub fn feedback(stats: &TextStatistics, signals: &SignalCounts) -> (Vec<String>, Vec<String>) {
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        for check in FeedbackCheck::ALL {
            if check.passes(stats, signals) {
                strengths.push(check.strength().to_string());
            } else {
                weaknesses.push(check.weakness().to_string());
            }
        }
        (strengths, weaknesses)
    }
}

/// A binary check that yields either a strength or a weakness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCheck {
    /// At least 25 words
    Length,
    /// No absolute-claim phrase
    AbsoluteClaims,
    /// No privacy cue
    PersonalData,
    /// No sensitive-domain cue
    SensitiveDomain,
}

impl FeedbackCheck {
    /// Checks in report order
    pub const ALL: [FeedbackCheck; 4] = [
        FeedbackCheck::Length,
        FeedbackCheck::AbsoluteClaims,
        FeedbackCheck::PersonalData,
        FeedbackCheck::SensitiveDomain,
    ];

    pub fn passes(&self, stats: &TextStatistics, signals: &SignalCounts) -> bool {
        match self {
            FeedbackCheck::Length => stats.word_count >= MIN_WORDS,
            FeedbackCheck::AbsoluteClaims => signals.absolute_claim_hits == 0,
            FeedbackCheck::PersonalData => signals.privacy_hits == 0,
            FeedbackCheck::SensitiveDomain => signals.sensitive_hits == 0,
        }
    }

    pub fn strength(&self) -> &'static str {
        match self {
            FeedbackCheck::Length => "sufficient length",
            FeedbackCheck::AbsoluteClaims => "no absolute claims",
            FeedbackCheck::PersonalData => "no personal-data cues",
            FeedbackCheck::SensitiveDomain => "no sensitive-domain cues",
        }
    }

    pub fn weakness(&self) -> &'static str {
        match self {
            FeedbackCheck::Length => "too short, add CTA",
            FeedbackCheck::AbsoluteClaims => "contains absolute claims",
            FeedbackCheck::PersonalData => "potential personal data collection",
            FeedbackCheck::SensitiveDomain => "sensitive domain cues detected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RubricLevel;

    fn stats(word_count: usize, sentence_count: usize) -> TextStatistics {
        TextStatistics {
            word_count,
            sentence_count,
            avg_words_per_sentence: crate::analyzer::stats::round2(
                word_count as f64 / sentence_count as f64,
            ),
        }
    }

    fn signals(abs: usize, sens: usize, priv_: usize) -> SignalCounts {
        SignalCounts {
            absolute_claim_hits: abs,
            sensitive_hits: sens,
            privacy_hits: priv_,
        }
    }

    #[test]
    fn test_clarity_truncates_doubled_average() {
        assert_eq!(ScoreCalculator::clarity(11.0), 68);
        // 2 * 7.33 = 14.66 -> 14
        assert_eq!(ScoreCalculator::clarity(7.33), 76);
        assert_eq!(ScoreCalculator::clarity(0.33), 90);
    }

    #[test]
    fn test_clarity_lower_bound() {
        assert_eq!(ScoreCalculator::clarity(25.0), 40);
        assert_eq!(ScoreCalculator::clarity(10_000.0), 40);
    }

    #[test]
    fn test_clarity_never_exceeds_upper_bound() {
        assert!(ScoreCalculator::clarity(0.0) <= 95);
        assert_eq!(ScoreCalculator::clarity(0.0), 90);
    }

    #[test]
    fn test_credibility() {
        assert_eq!(ScoreCalculator::credibility(0), 85);
        assert_eq!(ScoreCalculator::credibility(3), 55);
        assert_eq!(ScoreCalculator::credibility(5), 35);
        assert_eq!(ScoreCalculator::credibility(7), 35);
        assert_eq!(ScoreCalculator::credibility(usize::MAX), 35);
    }

    #[test]
    fn test_compliance_risk() {
        assert_eq!(ScoreCalculator::compliance_risk(&signals(0, 0, 0)), 20);
        assert_eq!(ScoreCalculator::compliance_risk(&signals(3, 1, 0)), 75);
        assert_eq!(ScoreCalculator::compliance_risk(&signals(0, 0, 3)), 50);
        assert_eq!(ScoreCalculator::compliance_risk(&signals(7, 0, 0)), 95);
        assert_eq!(
            ScoreCalculator::compliance_risk(&signals(usize::MAX, usize::MAX, usize::MAX)),
            95
        );
    }

    #[test]
    fn test_overall_truncates_mean() {
        // (68 + 55 + 25) / 3 = 49.33
        assert_eq!(ScoreCalculator::overall(68, 55, 75), 49);
        // best case: (90 + 85 + 80) / 3 = 85
        assert_eq!(ScoreCalculator::overall(90, 85, 20), 85);
    }

    #[test]
    fn test_calculate_breakdown() {
        let breakdown = ScoreCalculator::calculate(&stats(11, 1), &signals(3, 1, 0));
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                clarity: 68,
                credibility: 55,
                compliance_risk: 75,
                overall_score: 49,
            }
        );
    }

    #[test]
    fn test_calculate_breakdown_neutral_text() {
        let breakdown = ScoreCalculator::calculate(&stats(30, 2), &signals(0, 0, 0));
        assert_eq!(breakdown.clarity, 60);
        assert_eq!(breakdown.credibility, 85);
        assert_eq!(breakdown.compliance_risk, 20);
        assert_eq!(breakdown.overall_score, 75);
    }

    #[test]
    fn test_feedback_all_strengths() {
        let (strengths, weaknesses) = ScoreCalculator::feedback(&stats(30, 2), &signals(0, 0, 0));
        assert_eq!(
            strengths,
            vec![
                "sufficient length",
                "no absolute claims",
                "no personal-data cues",
                "no sensitive-domain cues",
            ]
        );
        assert!(weaknesses.is_empty());
    }

    #[test]
    fn test_feedback_all_weaknesses_in_order() {
        let (strengths, weaknesses) = ScoreCalculator::feedback(&stats(5, 1), &signals(1, 1, 1));
        assert!(strengths.is_empty());
        assert_eq!(
            weaknesses,
            vec![
                "too short, add CTA",
                "contains absolute claims",
                "potential personal data collection",
                "sensitive domain cues detected",
            ]
        );
    }

    #[test]
    fn test_feedback_length_boundary() {
        let (strengths, _) = ScoreCalculator::feedback(&stats(25, 1), &signals(0, 0, 0));
        assert_eq!(strengths[0], "sufficient length");
        let (_, weaknesses) = ScoreCalculator::feedback(&stats(24, 1), &signals(0, 0, 0));
        assert_eq!(weaknesses, vec!["too short, add CTA"]);
    }

    #[test]
    fn test_rubric_from_calculator() {
        assert_eq!(ScoreCalculator::rubric(49).level, RubricLevel::Fair);
        assert_eq!(ScoreCalculator::rubric(85).level, RubricLevel::Excellent);
    }
}
