//! Logging Infrastructure
//!
//! Console logs go to stderr so command output on stdout stays machine
//! readable. With a log directory, application logs are also written to
//! a daily rotating `configurator.YYYY-MM-DD` file.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rolling log file prefix
pub const LOG_FILE_PREFIX: &str = "configurator";

/// Days a rotated log file is kept
pub const LOG_RETENTION_DAYS: i64 = 14;

/// Initialize the logger (console only, info level, text format)
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file(None, None, None)
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` overrides `log_level` when set. Old rotated files in
/// `log_dir` are cleaned up once at startup.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let json = json.unwrap_or(false);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_path = Path::new(dir);
            fs::create_dir_all(log_path)?;

            match cleanup_old_logs(log_path, LOG_RETENTION_DAYS) {
                Ok(0) => {}
                Ok(removed) => eprintln!("Removed {removed} old log file(s) from {dir}"),
                Err(e) => eprintln!("Failed to clean up old logs in {dir}: {e}"),
            }

            let appender = RollingFileAppender::new(Rotation::DAILY, log_path, LOG_FILE_PREFIX);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(appender));
            Some(if json { layer.json().boxed() } else { layer.boxed() })
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Delete rotated log files older than `days`
///
/// Only files named `configurator.YYYY-MM-DD` are considered; the date in
/// the name decides the age. Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &Path, days: i64) -> std::io::Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let cutoff = Local::now().date_naive() - chrono::Duration::days(days);
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(date) = rotated_file_date(name)
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Date suffix of a rotated log file name
fn rotated_file_date(name: &str) -> Option<NaiveDate> {
    let date_part = name
        .strip_prefix(LOG_FILE_PREFIX)
        .and_then(|rest| rest.strip_prefix('.'))?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_log_file(dir: &Path, date: NaiveDate) -> std::path::PathBuf {
        let path = dir.join(format!("{LOG_FILE_PREFIX}.{}", date.format("%Y-%m-%d")));
        fs::write(&path, "log line\n").unwrap();
        path
    }

    #[test]
    fn test_rotated_file_date() {
        assert_eq!(
            rotated_file_date("configurator.2026-01-31"),
            NaiveDate::from_ymd_opt(2026, 1, 31)
        );
        assert_eq!(rotated_file_date("configurator.log"), None);
        assert_eq!(rotated_file_date("other.2026-01-31"), None);
        assert_eq!(rotated_file_date("configurator2026-01-31"), None);
    }

    #[test]
    fn test_cleanup_removes_only_old_rotated_files() {
        let dir = tempfile::tempdir().unwrap();
        let today = Local::now().date_naive();

        let old = make_log_file(dir.path(), today - chrono::Duration::days(30));
        let recent = make_log_file(dir.path(), today - chrono::Duration::days(2));
        let unrelated = dir.path().join("notes.txt");
        fs::write(&unrelated, "keep").unwrap();

        let removed = cleanup_old_logs(dir.path(), LOG_RETENTION_DAYS).unwrap();

        assert_eq!(removed, 1);
        assert!(!old.exists());
        assert!(recent.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert_eq!(cleanup_old_logs(&missing, LOG_RETENTION_DAYS).unwrap(), 0);
    }
}
