//! Request record exchanged with the hosting request-interception layer
//!
//! Only `uri`, `querystring` and the first `accept` header value are read.
//! Every other field of the record is carried through untouched.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One header value as delivered by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderEntry {
    /// Original-case header name, when the host provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
    /// Any other host-provided fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Inbound viewer request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub uri: String,
    /// URL-encoded query string without the leading `?`
    #[serde(default)]
    pub querystring: String,
    /// Lower-cased header name to ordered values
    #[serde(default)]
    pub headers: BTreeMap<String, Vec<HeaderEntry>>,
    /// Host-specific fields (method, client IP, ...) preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Request {
    pub fn new(uri: impl Into<String>, querystring: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            querystring: querystring.into(),
            headers: BTreeMap::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Append a header value, keyed by the lower-cased name
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(HeaderEntry {
                key: Some(name.to_string()),
                value: value.into(),
                extra: serde_json::Map::new(),
            });
        self
    }

    /// First `accept` header value, if any
    pub fn accept(&self) -> Option<&str> {
        self.headers
            .get(http::header::ACCEPT.as_str())
            .and_then(|values| values.first())
            .map(|entry| entry.value.as_str())
    }
}

/// Parse a URL-encoded query string.
///
/// `+` decodes to a space and percent escapes are decoded; escapes that do
/// not form valid UTF-8 become U+FFFD, so the key stays present. A key without `=` maps to an empty value.
/// When a key repeats, its first occurrence wins.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.entry(decode(key)).or_insert_with(|| decode(value));
    }
    params
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
