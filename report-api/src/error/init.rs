use std::path::PathBuf;

use displaydoc::Display;
use thiserror::Error;

/// Errors that prevent the service from starting.
#[derive(Debug, Error, Display)]
pub enum InitError {
    /// Failed to read config: {0}
    Config(#[from] Box<crate::config::Error>),
    /// Invalid config: {0}
    InvalidConfig(&'static str),
    /// Failed to initialize telemetry: {0}
    Telemetry(#[from] telemetry::TelemetryError),
    /// Failed to read report catalog {path:?}: {error}
    CatalogRead {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Failed to parse report catalog {path:?}: {error}
    CatalogParse {
        path: PathBuf,
        error: serde_yml::Error,
    },
    /// Report catalog {0:?} contains no reports
    EmptyCatalog(PathBuf),
    /// Failed to bind listener on {address}: {error}
    Bind {
        address: String,
        error: std::io::Error,
    },
}
