use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the `KEY=VALUE` configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot use resource file {}: {detail}", .path.display())]
    Resource {
        path: PathBuf,
        detail: String,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
