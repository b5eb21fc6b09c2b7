//! Path parsing errors
//!
//! A malformed path is the only hard failure of the rewrite core. The
//! filter never surfaces it to the host: the request is passed through
//! untouched instead.

use thiserror::Error;

/// Errors raised while splitting a request path into prefix, base name
/// and extension
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No `/` anywhere in the path
    #[error("path '{path}' has no '/' separator")]
    MissingSeparator { path: String },

    /// The last path segment has no `.`
    #[error("path '{path}' has no file extension")]
    MissingExtension { path: String },

    /// The last path segment ends with `.`
    #[error("path '{path}' has an empty file extension")]
    EmptyExtension { path: String },
}

impl PathError {
    /// The offending path, whatever the variant
    pub fn path(&self) -> &str {
        match self {
            PathError::MissingSeparator { path }
            | PathError::MissingExtension { path }
            | PathError::EmptyExtension { path } => path,
        }
    }
}
