// ABOUTME: CLI driver for the fitsum workout summary calculator
// ABOUTME: Runs the built-in sample sessions through factory, summary, and formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fitsum CLI.
//!
//! Feeds the built-in sample sessions through the calculation pipeline and
//! prints one summary line per session.
//!
//! Usage:
//! ```bash
//! # Text summaries (default)
//! fitsum
//!
//! # JSON records, one per line
//! fitsum --format json
//!
//! # Debug logging without touching RUST_LOG
//! fitsum --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use fitsum::formatters::{format_summary, OutputFormat};
use fitsum::logging::LoggingConfig;
use fitsum::workouts::factory::build_workout;

/// Sample sessions fed through the pipeline, in print order.
/// Each record is a wire code plus the kind's positional numeric fields.
const SAMPLE_SESSIONS: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(
    name = "fitsum",
    about = "Workout summary calculator",
    long_about = "Computes distance, mean speed, and calories for the built-in \
                  sample workout sessions and prints one summary per session."
)]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_fallback_level("debug");
    }
    logging.init()?;

    let format = OutputFormat::from_str_param(&cli.format);
    debug!(?format, sessions = SAMPLE_SESSIONS.len(), "starting run");

    for (code, fields) in SAMPLE_SESSIONS {
        let session = build_workout(code, fields)?;
        let summary = session.summarize();
        debug!(
            kind = %summary.kind,
            distance_km = summary.distance_km,
            calories_kcal = summary.calories_kcal,
            "session summarized"
        );
        println!("{}", format_summary(&summary, format)?);
    }

    Ok(())
}
