//! Viewer request rewriting
//!
//! Turns a sizing request such as
//! ```text
//! /a1b2/photo.jpg?w=600&h=400&q=h
//! ```
//! into the positional path the image service understands:
//! ```text
//! /a1b2/c/640x360/h/webp/photo.jpg
//! ```
//!
//! Three steps, each taking the immutable [`RewriteConfig`](crate::config::RewriteConfig)
//! explicitly:
//! - [`params`] normalizes `w`, `h`, `t` and `q` and short-circuits when no
//!   sizing was requested
//! - [`dimension`] snaps each dimension onto the allowed set
//! - [`uri`] assembles the canonical path, negotiating the output format
//!   from the `Accept` header
//!
//! [`filter::RequestFilter`] wraps them with the fail-open policy.

pub mod dimension;
pub mod error;
pub mod filter;
pub mod format;
pub mod mode;
pub mod params;
pub mod path;
pub mod uri;

pub use dimension::{match_dimension, parse_dimension, resolve_dimension, ToleranceWindow};
pub use error::PathError;
pub use filter::{FilterDecision, RequestFilter};
pub use format::{accepts_webp, negotiate_format, normalize_extension};
pub use mode::ProcessingMode;
pub use params::{Quality, RequestParameters, Transform};
pub use path::ImagePath;
pub use uri::{CanonicalPath, SizeSpec};
