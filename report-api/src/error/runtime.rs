use displaydoc::Display;
use thiserror::Error;

use super::init::InitError;

/// Errors that stop a running service.
#[derive(Debug, Error, Display)]
pub enum RuntimeError {
    /// Initialization error: {0}
    Init(#[from] InitError),
    /// Server error: {0}
    Serve(std::io::Error),
}
