//! mediascore: content review CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mediascore::analyzer::EvaluationEngine;
use mediascore::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use mediascore::reporter::{ConsoleReporter, JsonReporter};
use mediascore::{EvaluationRequest, FileEvaluation};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Path argument that reads the text from stdin
const STDIN_PATH: &str = "-";

/// mediascore: heuristic quality and compliance-risk review for message copy
#[derive(Parser, Debug)]
#[command(name = "mediascore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file or directory to evaluate, or `-` for stdin
    path: Option<PathBuf>,

    /// Evaluate this text instead of a file
    #[arg(long, conflicts_with = "path")]
    text: Option<String>,

    /// Kind of message (e.g. promotion, announcement)
    #[arg(long, default_value = mediascore::DEFAULT_MESSAGE_TYPE)]
    message_type: String,

    /// Publication channel (e.g. social, email, sms)
    #[arg(long, default_value = mediascore::DEFAULT_CHANNEL)]
    channel: String,

    /// Intended audience
    #[arg(long, default_value = mediascore::DEFAULT_AUDIENCE)]
    audience: String,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (detailed analysis points and debug logs)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .mediascorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate files in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .mediascorerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 55)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("mediascore=debug".parse()?),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = match args.path.as_deref() {
        Some(p) if p.is_file() => p.parent().unwrap_or(Path::new(".")).to_path_buf(),
        Some(p) if p.is_dir() => p.to_path_buf(),
        _ => cwd,
    };

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);
    let engine = EvaluationEngine::from_config(&config);

    let template = EvaluationRequest::default()
        .with_message_type(args.message_type.as_str())
        .with_channel(args.channel.as_str())
        .with_audience(args.audience.as_str());

    let (results, had_errors) = if let Some(ref text) = args.text {
        let request = EvaluationRequest {
            text: text.clone(),
            ..template
        };
        (
            vec![FileEvaluation {
                file_path: PathBuf::from("<text>"),
                result: engine.evaluate(&request),
            }],
            false,
        )
    } else {
        let path = args
            .path
            .clone()
            .context("A path or --text is required")?;
        if path.as_os_str() == STDIN_PATH {
            (vec![evaluate_stdin(&engine, &template)?], false)
        } else {
            let files = collect_input_files(&path, &config)?;
            if files.is_empty() {
                eprintln!("{}: No text files found", "Warning".yellow());
                return Ok(ExitCode::from(2));
            }

            if let Some(jobs) = args.jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .ok();
            }

            if args.parallel || files.len() > 10 {
                evaluate_files_parallel(&engine, &files, &template, args.quiet)
            } else {
                evaluate_files_sequential(&engine, &files, &template, args.quiet)
            }
        }
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to evaluate", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = EvaluationEngine::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if args.text.is_some() {
            // Inline text has no file path; print the bare result
            println!("{}", reporter.report_result(&results[0].result));
        } else if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }

        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    if let Some(threshold) = config.threshold {
        let below: Vec<&FileEvaluation> = results
            .iter()
            .filter(|r| r.result.score < threshold)
            .collect();
        if !below.is_empty() {
            if !args.quiet {
                for r in &below {
                    eprintln!(
                        "{}: {} scored {} (threshold: {})",
                        "Failed".red().bold(),
                        r.file_path.display(),
                        r.result.score,
                        threshold
                    );
                }
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        anyhow::bail!(
            "{} already exists; use --dir to write elsewhere or remove it first",
            config_path.display()
        );
    }

    let threshold_value = threshold.unwrap_or(55);
    let json = format!(
        r#"{{
  "threshold": {},
  "keywords": {{
    "absoluteClaims": [],
    "sensitive": [],
    "privacy": []
  }},
  "ignore": [
    "**/drafts/**",
    "**/node_modules/**"
  ],
  "filePatterns": [".txt", ".md"],
  "server": {{
    "host": "0.0.0.0",
    "port": 8000,
    "staticDir": "static"
  }}
}}
"#,
        threshold_value
    );

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );

    Ok(ExitCode::SUCCESS)
}

fn evaluate_stdin(engine: &EvaluationEngine, template: &EvaluationRequest) -> Result<FileEvaluation> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    let request = EvaluationRequest {
        text,
        ..template.clone()
    };
    Ok(FileEvaluation {
        file_path: PathBuf::from(STDIN_PATH),
        result: engine.evaluate(&request),
    })
}

/// Collect input files: the path itself, or matching files under a directory
fn collect_input_files(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };
    let patterns = config.get_file_patterns();

    if path.is_file() {
        if let Some(ref set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !matches_pattern(file_path, &patterns) {
            continue;
        }
        if let Some(ref set) = ignore_set {
            if is_ignored(file_path, set) {
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    // Sort for consistent output
    files.sort();
    Ok(files)
}

fn matches_pattern(path: &Path, patterns: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if path.components().any(|c| c.as_os_str() == "node_modules") {
        return false;
    }
    patterns.iter().any(|p| name.ends_with(p))
}

fn evaluate_files_sequential(
    engine: &EvaluationEngine,
    files: &[PathBuf],
    template: &EvaluationRequest,
    quiet: bool,
) -> (Vec<FileEvaluation>, bool) {
    let mut results = Vec::new();
    let mut had_errors = false;

    for file in files {
        match engine.evaluate_path(file, template) {
            Ok(result) => results.push(result),
            Err(e) => {
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), e);
                }
                had_errors = true;
            }
        }
    }

    (results, had_errors)
}

fn evaluate_files_parallel(
    engine: &EvaluationEngine,
    files: &[PathBuf],
    template: &EvaluationRequest,
    quiet: bool,
) -> (Vec<FileEvaluation>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    // par_iter + collect keeps input order
    let results: Vec<_> = files
        .par_iter()
        .filter_map(|file| match engine.evaluate_path(file, template) {
            Ok(result) => Some(result),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), e);
                }
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}
