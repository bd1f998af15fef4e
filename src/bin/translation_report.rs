//! Translation report binary - checks the translation table and prints the result as JSON
//!
//! Usage:
//!   cargo run --bin translation-report            # Print the full report
//!   cargo run --bin translation-report -- --strict # Exit non-zero on warnings too
//!
//! Placeholder mismatches and blank translations are errors; keys a language
//! has not translated yet are warnings.

use anyhow::{Context, Result};
use tracing::{info, warn};
use village_care::i18n::TranslationValidator;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_report=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let strict = std::env::args().any(|arg| arg == "--strict");

    let report = TranslationValidator::validate_table();
    for coverage in &report.coverage {
        info!(
            "{}: {}/{} keys ({:.1}%)",
            coverage.code, coverage.translated, coverage.total, coverage.percent
        );
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);

    if report.has_errors() {
        warn!("{} translation errors", report.errors.len());
        std::process::exit(1);
    }
    if strict && report.has_warnings() {
        warn!("{} missing translations", report.warnings.len());
        std::process::exit(2);
    }
    Ok(())
}
