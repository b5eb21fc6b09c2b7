// Error types module

use thiserror::Error;

/// Errors surfaced outside the rewrite core: configuration loading and the
/// request record I/O of the binary. The rewrite itself never fails.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// Configuration errors (invalid YAML, missing env vars, out-of-range values)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request record is not valid JSON or misses required fields
    #[error("Invalid request record: {0}")]
    Json(#[from] serde_json::Error),
}
