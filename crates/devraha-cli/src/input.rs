//! Input loading.

use serde_json::Value;
use std::io::{self, Read};
use thiserror::Error;

/// Errors raised while loading input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be read.
    #[error("failed to read file {path}: {source}")]
    File {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Stdin could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    /// The input is not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads JSON from `path`, or from stdin when no path is given.
pub fn read_json(path: Option<&str>) -> Result<Value, InputError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_string(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    tracing::debug!(bytes = text.len(), "read input");
    Ok(serde_json::from_str(&text)?)
}
