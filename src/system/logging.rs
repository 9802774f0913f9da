//! Logging system initialization
//!
//! The terminal is owned by the UI, so logs never go to stdout/stderr: they are
//! written to the configured file, or discarded when no file is configured.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, ShortlyError};

/// Initialize logging system based on configuration
///
/// **Note**: call once, after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let writer = build_writer(config)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ShortlyError::logging(format!("invalid level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| ShortlyError::logging(e.to_string()))?;

    Ok(guard)
}

fn build_writer(config: &LoggingConfig) -> Result<Box<dyn std::io::Write + Send + Sync>> {
    if config.file.is_empty() {
        return Ok(Box::new(std::io::sink()));
    }

    let path = Path::new(&config.file);
    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let prefix = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("shortly.log")
            .trim_end_matches(".log")
            .to_string();
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| ShortlyError::logging(format!("rolling appender: {}", e)))?;
        return Ok(Box::new(appender));
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ShortlyError::logging(format!("cannot open {}: {}", config.file, e)))?;
    Ok(Box::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_sink() {
        let cfg = LoggingConfig {
            file: String::new(),
            ..LoggingConfig::default()
        };
        assert!(build_writer(&cfg).is_ok());
    }

    #[test]
    fn test_plain_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("client.log");
        let cfg = LoggingConfig {
            file: file.to_string_lossy().into_owned(),
            ..LoggingConfig::default()
        };
        let mut writer = build_writer(&cfg).unwrap();
        writer.write_all(b"hello\n").unwrap();
        drop(writer);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello\n");
    }

    #[test]
    fn test_missing_directory_is_logging_error() {
        let cfg = LoggingConfig {
            file: "/nonexistent-dir-for-shortly/x/client.log".to_string(),
            ..LoggingConfig::default()
        };
        let err = build_writer(&cfg).err().unwrap();
        assert!(matches!(err, ShortlyError::Logging(_)));
    }
}
