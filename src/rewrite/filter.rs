//! Viewer request filter
//!
//! Ties the normalizer, matcher and builder together and enforces the
//! fail-open policy: whatever happens, the host gets a request back. Only
//! the `uri` ever changes.

use std::sync::Arc;

use super::error::PathError;
use super::params::RequestParameters;
use super::uri::CanonicalPath;
use crate::config::RewriteConfig;
use crate::error::RewriteError;
use crate::request::{parse_query_string, Request};

/// Outcome of inspecting one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// No sizing requested; forward as-is
    PassThrough,
    /// Forward with the uri replaced
    Rewrite(CanonicalPath),
    /// Sizing requested but the path could not be split; forward as-is
    Malformed(PathError),
}

impl FilterDecision {
    pub fn is_rewrite(&self) -> bool {
        matches!(self, FilterDecision::Rewrite(_))
    }

    /// The rewritten uri, if any
    pub fn rewritten_uri(&self) -> Option<String> {
        match self {
            FilterDecision::Rewrite(path) => Some(path.to_string()),
            FilterDecision::PassThrough | FilterDecision::Malformed(_) => None,
        }
    }
}

/// Rewrites sizing requests into canonical image-service paths
#[derive(Debug, Clone)]
pub struct RequestFilter {
    config: Arc<RewriteConfig>,
}

impl RequestFilter {
    pub fn new(config: RewriteConfig) -> Self {
        Self::with_shared(Arc::new(config))
    }

    pub fn with_shared(config: Arc<RewriteConfig>) -> Self {
        Self { config }
    }

    /// Decide from the raw parts of a request
    pub fn decide(&self, uri: &str, querystring: &str, accept: Option<&str>) -> FilterDecision {
        let query = parse_query_string(querystring);
        let Some(params) = RequestParameters::from_query(&query, &self.config) else {
            return FilterDecision::PassThrough;
        };

        match CanonicalPath::build(uri, &params, accept, &self.config) {
            Ok(path) => FilterDecision::Rewrite(path),
            Err(err) => FilterDecision::Malformed(err),
        }
    }

    pub fn evaluate(&self, request: &Request) -> FilterDecision {
        self.decide(&request.uri, &request.querystring, request.accept())
    }

    /// Rewrite `request` in place of its uri, or hand it back unchanged.
    pub fn apply(&self, mut request: Request) -> Request {
        match self.evaluate(&request) {
            FilterDecision::PassThrough => {
                tracing::debug!(uri = %request.uri, "No sizing parameters, passing through");
            }
            FilterDecision::Rewrite(path) => {
                let rewritten = path.to_string();
                tracing::debug!(
                    uri = %request.uri,
                    rewritten = %rewritten,
                    mode = %path.mode,
                    format = %path.format,
                    "Rewrote viewer request"
                );
                request.uri = rewritten;
            }
            FilterDecision::Malformed(err) => {
                tracing::warn!(
                    uri = %request.uri,
                    querystring = %request.querystring,
                    error = %err,
                    "Cannot rewrite malformed path, passing through"
                );
            }
        }
        request
    }

    /// Apply the filter to a JSON request record.
    ///
    /// A request that is not rewritten comes back as the exact input text;
    /// a rewritten one is re-serialized with only `uri` changed.
    pub fn apply_record(&self, raw: &str) -> Result<String, RewriteError> {
        let request: Request = serde_json::from_str(raw)?;
        let original_uri = request.uri.clone();
        let request = self.apply(request);

        if request.uri == original_uri {
            return Ok(raw.to_string());
        }
        Ok(serde_json::to_string(&request)?)
    }
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::new(RewriteConfig::default())
    }
}
