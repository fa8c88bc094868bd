use super::config::{get_config_dir, LogConfig};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "swatch.log";
const FALLBACK_LEVEL: &str = "info";

/// Send logs to a file; the terminal belongs to the UI. `RUST_LOG` wins over the
/// configured level, and an unparsable level falls back to `info` with a warning.
/// Keep the guard alive until exit so buffered lines are flushed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let path = config
        .file
        .clone()
        .unwrap_or_else(|| default_log_dir().join(LOG_FILE));
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let file_name = path
        .file_name()
        .context("log file path has no file name")?
        .to_owned();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let (filter, bad_level) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => level_filter(&config.level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    if let Some(err) = bad_level {
        tracing::warn!(level = %config.level, %err, "invalid log level, using {FALLBACK_LEVEL}");
    }

    Ok(guard)
}

/// Filter for the configured level, or the fallback plus the parse error.
fn level_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LEVEL), Some(err)),
    }
}

fn default_log_dir() -> PathBuf {
    get_config_dir().unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_falls_back() {
        let (filter, err) = level_filter("swatch=debug,warn");
        assert!(err.is_none());
        assert!(filter.to_string().contains("swatch=debug"));

        let (filter, err) = level_filter("swatch=loud");
        assert!(err.is_some());
        assert_eq!(filter.to_string(), FALLBACK_LEVEL);
    }

    // The global subscriber can only be installed once per process, so this is the
    // only test that calls `init`.
    #[test]
    fn test_init_survives_bad_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("swatch.log");
        let guard = init(&LogConfig {
            level: "swatch=loud".to_string(),
            file: Some(path.clone()),
        })
        .unwrap();
        tracing::info!("after init");
        drop(guard);

        assert!(path.parent().unwrap().is_dir());
    }
}
