use thiserror::Error;

/// Errors from the text-accepting entry points.
///
/// Normalizing an already-parsed value never fails; only turning text into a
/// value can.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
