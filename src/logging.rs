//! Tracing subscriber setup.
//!
//! The interactive mode owns the terminal, so its logs either go to a file or
//! nowhere; headless runs log to stderr and keep stdout for the JSON report.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Discard,
}

impl LogTarget {
    pub fn choose(log_file: Option<PathBuf>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init(target: &LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|err| anyhow!("Failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_selection() {
        let path = PathBuf::from("snake.log");
        assert_eq!(
            LogTarget::choose(Some(path.clone()), true),
            LogTarget::File(path.clone())
        );
        assert_eq!(
            LogTarget::choose(Some(path.clone()), false),
            LogTarget::File(path)
        );
        assert_eq!(LogTarget::choose(None, true), LogTarget::Discard);
        assert_eq!(LogTarget::choose(None, false), LogTarget::Stderr);
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = LogTarget::File(dir.path().join("missing").join("snake.log"));
        let err = init(&target).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
