use crate::config::state_dir;
use crate::error::{FolioError, Result};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The alternate screen owns the terminal, so TUI logs go to a file.
    File,
}

pub fn log_file_path() -> PathBuf {
    state_dir().join("folio").join("folio.log")
}

pub fn init(level: &str, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| FolioError::Logging(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File => {
            let path = log_file_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    };

    result.map_err(|e| FolioError::Logging(e.to_string()))
}
