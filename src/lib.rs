// Kirikae viewer-request rewriter library
//
// Normalizes image sizing requests into canonical, cache-friendly paths for
// a downstream image service. No image data is touched here.

pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod rewrite;

pub use config::RewriteConfig;
pub use error::RewriteError;
pub use request::{HeaderEntry, Request};
pub use rewrite::{CanonicalPath, FilterDecision, RequestFilter};
