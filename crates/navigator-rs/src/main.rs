//! Score page-context signals and emit the Navigator system prompt.
//!
//! Signals come either from a JSON document (`--signals`, validated against
//! the generated schema) or from individual flags.
//!
//! # Examples
//!
//! ```sh
//! # Score from inline flags
//! navigator score --dom-tokens 500
//!
//! # Full reason breakdown as JSON
//! navigator score --signals capture.json --json
//!
//! # Emit the assembled system prompt for a vision-fallback capture
//! navigator prompt --dom-tokens 120 --vision --vision-confidence low
//!
//! # Print the signals schema for the extension boundary
//! navigator schema
//! ```

use clap::{Args, Parser, Subcommand};
use navigator_rs::boundary;
use navigator_rs::prompt::{DirectiveTier, build_system_prompt};
use navigator_rs::reliability::{ReliabilitySignals, VisionConfidence, report};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

/// Context reliability scoring for the Navigator browser assistant.
#[derive(Parser)]
#[command(name = "navigator", version)]
struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the context reliability score
    Score(SignalSource),
    /// Assemble the full system prompt for the computed score
    Prompt(SignalSource),
    /// Print the JSON Schema for signal documents
    Schema,
}

/// Where the signals come from: a JSON document or inline flags.
#[derive(Args)]
struct SignalSource {
    /// Path to a signals JSON document (mutually exclusive with inline flags)
    #[arg(
        long,
        conflicts_with_all = ["no_dom", "dom_tokens", "churn", "vision", "vision_confidence"]
    )]
    signals: Option<PathBuf>,

    /// No DOM-derived context was available
    #[arg(long)]
    no_dom: bool,

    /// Extracted DOM context size in tokens
    #[arg(long, default_value_t = 0)]
    dom_tokens: u32,

    /// DOM mutation magnitude since the last capture
    #[arg(long, default_value_t = 0.0)]
    churn: f64,

    /// A vision (screenshot) fallback contributed context
    #[arg(long)]
    vision: bool,

    /// Confidence reported by the vision fallback (low, medium, high, none)
    #[arg(long, value_parser = parse_confidence)]
    vision_confidence: Option<VisionConfidence>,
}

impl SignalSource {
    fn resolve(&self) -> Result<ReliabilitySignals, String> {
        match &self.signals {
            Some(path) => read_signals(path),
            None => {
                let mut signals =
                    ReliabilitySignals::new(!self.no_dom, self.dom_tokens).with_churn(self.churn);
                if self.vision {
                    signals =
                        signals.with_vision(self.vision_confidence.unwrap_or_default());
                }
                Ok(signals)
            }
        }
    }
}

fn parse_confidence(s: &str) -> Result<VisionConfidence, String> {
    s.parse()
}

/// Load and boundary-validate a signals document from disk.
fn read_signals(path: &Path) -> Result<ReliabilitySignals, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    boundary::validate_signals(&raw)
}

/// JSON output shape for the `prompt` subcommand.
#[derive(Serialize)]
struct PromptOutput {
    context_reliability: u8,
    tier: DirectiveTier,
    system_prompt: String,
}

fn run(cli: &Cli) -> Result<String, String> {
    match &cli.command {
        Commands::Score(source) => {
            let signals = source.resolve()?;
            let result = report(&signals);
            debug!("{}", result.to_log_string());
            if cli.json {
                serde_json::to_string_pretty(&result).map_err(|e| e.to_string())
            } else {
                Ok(result.score.to_string())
            }
        }
        Commands::Prompt(source) => {
            let signals = source.resolve()?;
            let reliability = report(&signals).score;
            let system_prompt = build_system_prompt(&reliability.into());
            if cli.json {
                let output = PromptOutput {
                    context_reliability: reliability,
                    tier: DirectiveTier::for_score(reliability),
                    system_prompt,
                };
                serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
            } else {
                Ok(system_prompt)
            }
        }
        Commands::Schema => serde_json::to_string_pretty(&boundary::signals_schema())
            .map_err(|e| e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn inline_source() -> SignalSource {
        SignalSource {
            signals: None,
            no_dom: false,
            dom_tokens: 500,
            churn: 0.0,
            vision: false,
            vision_confidence: None,
        }
    }

    #[test]
    fn inline_flags_resolve_to_signals() {
        let mut source = inline_source();
        source.no_dom = true;
        source.dom_tokens = 120;
        source.vision = true;
        source.vision_confidence = Some(VisionConfidence::Medium);

        let signals = source.resolve().unwrap();
        assert!(!signals.has_dom_context);
        assert_eq!(signals.dom_token_count, 120);
        assert!(signals.vision_used);
        assert_eq!(signals.vision_confidence, VisionConfidence::Medium);
    }

    #[test]
    fn vision_confidence_without_vision_flag_is_dropped() {
        let mut source = inline_source();
        source.vision_confidence = Some(VisionConfidence::Low);

        let signals = source.resolve().unwrap();
        assert!(!signals.vision_used);
        assert_eq!(signals.vision_confidence, VisionConfidence::None);
    }

    #[test]
    fn signals_file_read_and_validated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"has_dom_context": true, "dom_token_count": 500, "vision_used": false}}"#
        )
        .unwrap();

        let signals = read_signals(file.path()).unwrap();
        assert_eq!(signals.dom_token_count, 500);
    }

    #[test]
    fn invalid_signals_file_reports_violations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"has_dom_context": true}}"#).unwrap();

        let err = read_signals(file.path()).unwrap_err();
        assert!(err.contains("dom_token_count"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_signals(Path::new("/nonexistent/capture.json")).unwrap_err();
        assert!(err.contains("/nonexistent/capture.json"));
    }

    #[test]
    fn confidence_parser_rejects_unknown_values() {
        assert!(parse_confidence("medium").is_ok());
        assert!(parse_confidence("certain").is_err());
    }
}
