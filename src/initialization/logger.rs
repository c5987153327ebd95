//! Logger initialization.
//!
//! Log lines go to stderr so they never interleave with the prompts and the
//! analysis output on stdout.

use std::io::Write;

use colored::{ColoredString, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// HTTP stack crates, never logged below `Info`.
const HTTP_STACK_MODULES: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

/// Initializes the global logger.
///
/// `RUST_LOG` is read first, then `level` overrides it for this crate, so
/// `RUST_LOG=debug` works for a quick look while `--log-level` stays explicit.
///
/// ```bash
/// RUST_LOG=debug cyber_scan_x
/// cyber_scan_x --log-level debug --log-format json 2> session.log
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in HTTP_STACK_MODULES {
        builder.filter_module(module, LevelFilter::Info.min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let line = json_line(
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        &record.args().to_string(),
    );
    writeln!(buf, "{}", line)
}

fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let (emoji, level) = level_badge(record.level());
    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        level,
        record.args()
    )
}

/// One JSON object per log line: `ts` (Unix millis), `level`, `target`, `msg`.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn level_badge(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            1_700_000_000_000,
            Level::Warn,
            "cyber_scan_x::geo",
            "Geolocation of 8.8.8.8 failed",
        );
        let value: serde_json::Value = serde_json::from_str(&line).expect("one JSON object");
        assert_eq!(value["ts"], 1_700_000_000_000i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "cyber_scan_x::geo");
        assert_eq!(value["msg"], "Geolocation of 8.8.8.8 failed");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_line_escapes_message() {
        let msg = "quote \" and\nnewline in «rapport»";
        let line = json_line(0, Level::Info, "t", msg);
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["msg"], msg);
    }

    #[test]
    fn test_level_badges_are_distinct() {
        let levels = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ];
        let emojis: std::collections::HashSet<_> =
            levels.iter().map(|&level| level_badge(level).0).collect();
        assert_eq!(emojis.len(), levels.len());
        assert!(level_badge(Level::Error).1.to_string().contains("ERROR"));
    }

    #[test]
    fn test_init_logger_second_call_is_an_error() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
