//! Query parameter normalization
//!
//! Recognized parameters:
//! - `w`: width, numeric string
//! - `h`: height, numeric string
//! - `t`: transform, `f` for fit, anything else falls back to the default
//! - `q`: quality, one of `l`, `m`, `h`, anything else falls back to the default
//!
//! Width and height are kept verbatim; numeric interpretation happens in the
//! dimension matcher. A request carrying neither `w` nor `h` has nothing to
//! normalize and is passed through by the caller.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RewriteConfig;

/// Query key for the requested width
pub const WIDTH_PARAM: &str = "w";
/// Query key for the requested height
pub const HEIGHT_PARAM: &str = "h";
/// Query key for the transform selector
pub const TRANSFORM_PARAM: &str = "t";
/// Query key for the quality selector
pub const QUALITY_PARAM: &str = "q";

/// How both dimensions are applied when width and height are given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transform {
    /// Resize to the smaller dimension, then crop the other one
    #[default]
    #[serde(rename = "c", alias = "crop")]
    Crop,
    /// Resize to fit within both dimensions
    #[serde(rename = "f", alias = "fit")]
    Fit,
}

impl Transform {
    pub fn tag(&self) -> &'static str {
        match self {
            Transform::Crop => "c",
            Transform::Fit => "f",
        }
    }

    /// Only `f` selects fit; every other input, including none, yields
    /// `default`.
    pub fn coerce(raw: Option<&str>, default: Transform) -> Transform {
        match raw {
            Some("f") => Transform::Fit,
            _ => default,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Output quality bucket forwarded to the image service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "l", alias = "low")]
    Low,
    #[default]
    #[serde(rename = "m", alias = "medium")]
    Medium,
    #[serde(rename = "h", alias = "high")]
    High,
}

impl Quality {
    pub fn tag(&self) -> &'static str {
        match self {
            Quality::Low => "l",
            Quality::Medium => "m",
            Quality::High => "h",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Quality> {
        match tag {
            "l" => Some(Quality::Low),
            "m" => Some(Quality::Medium),
            "h" => Some(Quality::High),
            _ => None,
        }
    }

    /// Unknown or missing tags yield `default`.
    pub fn coerce(raw: Option<&str>, default: Quality) -> Quality {
        raw.and_then(Quality::from_tag).unwrap_or(default)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Normalized sizing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    /// Raw width value, never empty when present
    pub width: Option<String>,
    /// Raw height value, never empty when present
    pub height: Option<String>,
    pub transform: Transform,
    pub quality: Quality,
}

impl RequestParameters {
    /// Normalize parsed query parameters.
    ///
    /// Returns None when neither width nor height is present. An empty value
    /// (`?w=`) counts as absent.
    pub fn from_query(query: &HashMap<String, String>, config: &RewriteConfig) -> Option<Self> {
        let width = non_empty(query, WIDTH_PARAM);
        let height = non_empty(query, HEIGHT_PARAM);

        if width.is_none() && height.is_none() {
            return None;
        }

        let raw_transform = query.get(TRANSFORM_PARAM).map(String::as_str);
        let raw_quality = query.get(QUALITY_PARAM).map(String::as_str);

        let transform = Transform::coerce(raw_transform, config.default_transform);
        let quality = Quality::coerce(raw_quality, config.default_quality);

        if let Some(raw) = raw_transform {
            if raw != transform.tag() {
                tracing::debug!(raw = %raw, transform = %transform, "Coerced transform selector");
            }
        }
        if let Some(raw) = raw_quality {
            if raw != quality.tag() {
                tracing::debug!(raw = %raw, quality = %quality, "Coerced quality selector");
            }
        }

        Some(Self {
            width,
            height,
            transform,
            quality,
        })
    }
}

fn non_empty(query: &HashMap<String, String>, key: &str) -> Option<String> {
    query.get(key).filter(|v| !v.is_empty()).cloned()
}
