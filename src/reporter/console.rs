//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::{EvaluationResult, FileEvaluation, RubricLevel, ScoreBreakdown};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the numbered analysis points
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single evaluation
    pub fn report(&self, evaluation: &FileEvaluation) {
        let result = &evaluation.result;
        self.print_header(evaluation);
        self.print_score(result);

        if let Some(ref breakdown) = result.breakdown {
            self.print_breakdown(breakdown);
        }

        self.print_feedback(result);

        if self.verbose && !result.detailed_analysis.is_empty() {
            self.print_analysis(result);
        }

        println!("   {}", result.paragraph.italic());
        println!();
    }

    /// Report multiple evaluations with summary
    pub fn report_many(&self, evaluations: &[FileEvaluation], stats: &AggregateStats) {
        for evaluation in evaluations {
            self.report(evaluation);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, evaluation: &FileEvaluation) {
        println!("{}", self.format_quiet(evaluation));
    }

    /// One-line summary: `path: score (level)`
    pub fn format_quiet(&self, evaluation: &FileEvaluation) -> String {
        format!(
            "{}: {} ({})",
            evaluation.file_path.display(),
            evaluation.result.score,
            self.colorize_level(evaluation.result.rubric.level)
        )
    }

    fn print_header(&self, evaluation: &FileEvaluation) {
        let stats = &evaluation.result.stats;
        println!();
        println!(
            "{}",
            format!("📝 Content Review: {}", evaluation.file_path.display()).bold()
        );
        println!(
            "   Words: {} | Sentences: {} | Avg words/sentence: {:.2}",
            stats.word_count, stats.sentence_count, stats.avg_words_per_sentence
        );
        println!();
    }

    fn print_score(&self, result: &EvaluationResult) {
        let level = self.colorize_level(result.rubric.level);
        let score_bar = self.create_score_bar(result.score);

        println!("   Score: {} {}", score_bar, level.bold());
        println!("   {}", result.rubric.description.dimmed());
        println!();
    }

    fn print_breakdown(&self, breakdown: &ScoreBreakdown) {
        println!("   {}", "Score Breakdown:".bold());

        let rows = [
            ("Clarity", breakdown.clarity, false),
            ("Credibility", breakdown.credibility, false),
            ("Compliance risk", breakdown.compliance_risk, true),
        ];
        for (name, score, lower_is_better) in rows {
            let bar = self.create_mini_bar(score, 100);
            let score_str = format!("{:>3}/100", score);
            let health = if lower_is_better { 100 - score.min(100) } else { score };
            let colored_score = if !self.use_colors {
                score_str.normal()
            } else if health >= 70 {
                score_str.green()
            } else if health >= 50 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, name);
        }
        println!();
    }

    fn print_feedback(&self, result: &EvaluationResult) {
        if !result.strengths.is_empty() {
            println!("   {}", "Strengths:".bold());
            for strength in &result.strengths {
                println!("   {} {}", "✓".green(), strength);
            }
        }
        if !result.weaknesses.is_empty() {
            println!("   {}", "Weaknesses:".bold());
            for weakness in &result.weaknesses {
                println!("   {} {}", "✗".red(), weakness);
            }
        }
        println!();
    }

    fn print_analysis(&self, result: &EvaluationResult) {
        println!("   {}", "Detailed Analysis:".bold());
        for point in &result.detailed_analysis {
            println!("   {} {}", "→".cyan(), point);
        }
        println!();
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files evaluated: {}",
            stats.files_evaluated.to_string().bold()
        );
        println!(
            "   Average score:   {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_level(stats.average_level)
        );
        println!("   Total words:     {}", stats.total_words);
        println!("   Flagged inputs:  {}", stats.flagged_inputs);
        println!();
    }

    fn colorize_level(&self, level: RubricLevel) -> colored::ColoredString {
        let s = level.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match level {
            RubricLevel::Excellent => s.green().bold(),
            RubricLevel::VeryGood => s.green(),
            RubricLevel::Good => s.yellow(),
            RubricLevel::Fair => s.red(),
            RubricLevel::Poor => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score.min(100) as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 70 {
                bar.green().to_string()
            } else if score >= 55 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = (score.min(max) as usize * 10) / max.max(1) as usize;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
