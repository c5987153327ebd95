//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `cyber_scan_x` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Wiring the interactive session to the terminal
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use cyber_scan_x::initialization::init_logger_with;
use cyber_scan_x::{run_session, Analyzer, Config, ConsoleReporter, ErrorType, SessionOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // so OPENAI_API_KEY does not have to be exported manually.
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let analyzer = Analyzer::from_config(&config).context("Failed to initialize HTTP client")?;

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout();
    let report = run_session(
        &analyzer,
        &mut input,
        &mut output,
        &mut ConsoleReporter::stdout(),
        &SessionOptions::default(),
    )
    .await?;

    if report.stats.total_errors() > 0 {
        for error_type in ErrorType::iter() {
            let count = report.stats.get_error_count(error_type);
            if count > 0 {
                log::info!("   {}: {}", error_type, count);
            }
        }
    }

    Ok(())
}
