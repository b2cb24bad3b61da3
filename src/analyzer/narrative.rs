//! Advisory notes and the narrative paragraph

use super::scoring::STRONG_PROFILE_SCORE;
use crate::{EvaluationRequest, ScoreBreakdown, SignalCounts, TextStatistics};

/// Paragraph returned when there is nothing to evaluate
pub const EMPTY_PARAGRAPH: &str = "No text was provided, so no evaluation was performed. \
Submit the message copy to receive a score and feedback.";

/// Number of advisory notes in a non-empty evaluation
pub const ANALYSIS_POINTS: usize = 15;

/// The fifteen numbered advisory notes
pub fn detailed_analysis(
    breakdown: &ScoreBreakdown,
    signals: &SignalCounts,
    request: &EvaluationRequest,
) -> Vec<String> {
    let notes = [
        format!(
            "Clarity score: {}/100. Shorter sentences make the message easier to follow.",
            breakdown.clarity
        ),
        format!(
            "Credibility score: {}/100. Verifiable, qualified statements build trust.",
            breakdown.credibility
        ),
        format!(
            "Compliance risk: {}/100. Lower values are safer to publish.",
            breakdown.compliance_risk
        ),
        format!(
            "Absolute claims detected: {}. Replace guarantees and superlatives with measurable statements.",
            signals.absolute_claim_hits
        ),
        format!(
            "Sensitive-domain cues detected: {}. Review wording that touches children, health or investment.",
            signals.sensitive_hits
        ),
        format!(
            "Personal-data cues detected: {}. Avoid collecting phone numbers, emails or addresses in public copy.",
            signals.privacy_hits
        ),
        format!(
            "Audience: {}. Match vocabulary and tone to this audience.",
            request.audience
        ),
        format!(
            "Channel: {}. Adapt length and formatting to the conventions of this channel.",
            request.channel
        ),
        format!(
            "Message type: {}. Keep one main idea that fits this message type.",
            request.message_type
        ),
        "Call to action: close with a single, explicit next step.".to_string(),
        "Evidence: support each key benefit with data, a source or a testimonial.".to_string(),
        "Tone: stay confident without pressure or fear-based wording.".to_string(),
        "Structure: lead with the most important point and keep paragraphs short.".to_string(),
        "Localization: make sure Arabic and English versions carry the same claims.".to_string(),
        "Next step: revise the weaknesses above and evaluate the text again.".to_string(),
    ];

    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {}", i + 1, note))
        .collect()
}

/// One-paragraph summary of the evaluation
pub fn paragraph(stats: &TextStatistics, signals: &SignalCounts, overall_score: u8) -> String {
    let profile = if overall_score >= STRONG_PROFILE_SCORE {
        "strong"
    } else {
        "mixed"
    };
    format!(
        "The message shows a {} overall profile. It contains {} words with an average of {:.2} words per sentence. \
Detected {} absolute claim(s), {} sensitive-domain cue(s) and {} personal-data cue(s).",
        profile,
        stats.word_count,
        stats.avg_words_per_sentence,
        signals.absolute_claim_hits,
        signals.sensitive_hits,
        signals.privacy_hits
    )
}
