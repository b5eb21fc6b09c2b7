//! Canonical path construction
//!
//! The rewritten path has the shape
//! ```text
//! {prefix}/{mode}/{size}/{quality}/{format}/{base_name}.{extension}
//! ```
//! e.g. `/a1b2/w/360/l/png/photo.png` or `/a1b2/c/640x360/m/webp/photo.jpg`.
//!
//! The file name keeps its original extension even when the format segment
//! differs: the format tells the image service what to produce, the file
//! name only identifies the source object.

use std::fmt;

use super::dimension::resolve_dimension;
use super::error::PathError;
use super::format::negotiate_format;
use super::mode::ProcessingMode;
use super::params::{Quality, RequestParameters};
use super::path::ImagePath;
use crate::config::RewriteConfig;

/// Resolved size segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSpec {
    /// Width-only or height-only modes
    Single(u32),
    /// Crop and fit modes
    Box { width: u32, height: u32 },
}

impl SizeSpec {
    /// Resolve the dimensions `mode` uses; the unused one is never matched.
    pub fn resolve(
        mode: ProcessingMode,
        params: &RequestParameters,
        config: &RewriteConfig,
    ) -> Self {
        let width = params.width.as_deref();
        let height = params.height.as_deref();

        match mode {
            ProcessingMode::WidthOnly => SizeSpec::Single(resolve_dimension(width, config)),
            ProcessingMode::HeightOnly => SizeSpec::Single(resolve_dimension(height, config)),
            ProcessingMode::Crop | ProcessingMode::Fit => SizeSpec::Box {
                width: resolve_dimension(width, config),
                height: resolve_dimension(height, config),
            },
        }
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Single(size) => write!(f, "{}", size),
            SizeSpec::Box { width, height } => write!(f, "{}x{}", width, height),
        }
    }
}

/// Rewritten request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPath {
    /// Original prefix, verbatim
    pub prefix: String,
    pub mode: ProcessingMode,
    pub size: SizeSpec,
    pub quality: Quality,
    /// Output format requested from the image service
    pub format: String,
    /// `{base_name}.{original extension}`
    pub file_name: String,
}

impl CanonicalPath {
    /// Build the canonical path for `path`.
    ///
    /// A path that cannot be split into prefix, base name and extension is
    /// the only error; callers are expected to pass the request through.
    pub fn build(
        path: &str,
        params: &RequestParameters,
        accept: Option<&str>,
        config: &RewriteConfig,
    ) -> Result<Self, PathError> {
        let image_path = ImagePath::parse(path)?;
        let mode = ProcessingMode::for_params(params);
        let size = SizeSpec::resolve(mode, params, config);
        let format = negotiate_format(accept, image_path.extension, config);

        Ok(Self {
            prefix: image_path.prefix.to_string(),
            mode,
            size,
            quality: params.quality,
            format,
            file_name: image_path.file_name(),
        })
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}/{}",
            self.prefix, self.mode, self.size, self.quality, self.format, self.file_name
        )
    }
}
