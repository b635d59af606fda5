//! Command-line front end for QuickyNote core.
//!
//! # Responsibility
//! - Classify ad-hoc note text from the shell.
//! - Run the built-in calibration suite and print its table.

use clap::{Parser, Subcommand};
use log::info;
use quickynote_core::{
    builtin_cases, default_log_level, init_logging, run_calibration, PriorityClassifier,
};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "quickynote", version, about = "QuickyNote priority tools")]
struct Cli {
    /// Log level (trace|debug|info|warn|error). Defaults by build mode.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging stays off when unset.
    #[arg(long, global = true, env = "QUICKYNOTE_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// Classify note content.
    Classify {
        /// Note content.
        content: String,
        /// Tag attached to the note; repeatable.
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Emit the verdict as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in calibration suite.
    Calibrate,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Classify { .. } => "classify",
            Self::Calibrate => "calibrate",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("quickynote: {err}");
            return ExitCode::FAILURE;
        }
    }

    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );

    let classifier = PriorityClassifier::bundled();
    match cli.command {
        Command::Ping => {
            println!("quickynote_core ping={}", quickynote_core::ping());
            println!("quickynote_core version={}", quickynote_core::core_version());
        }
        Command::Classify {
            content,
            tags,
            json,
        } => {
            let verdict = classifier.classify(&content, &tags);
            if json {
                match serde_json::to_string_pretty(&verdict) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("quickynote: failed to encode verdict: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!(
                    "{} (score {}, {}% confidence, {})",
                    verdict.level.indicator_title(),
                    verdict.score,
                    verdict.confidence_percent,
                    verdict.color.as_css()
                );
            }
        }
        Command::Calibrate => {
            let report = run_calibration(&classifier, &builtin_cases());
            for row in &report.rows {
                println!(
                    "{:<58} expected={:<6} actual={:<6} score={:>3} confidence={}% {}",
                    row.name,
                    row.expected.as_str(),
                    row.verdict.level.as_str(),
                    row.verdict.score,
                    row.verdict.confidence_percent,
                    if row.matched() { "ok" } else { "MISMATCH" }
                );
            }
            println!("overall confidence: {}%", report.overall_display());
        }
    }

    ExitCode::SUCCESS
}
