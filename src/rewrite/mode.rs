//! Processing mode selection

use std::fmt;

use super::params::{RequestParameters, Transform};

/// Which axis or strategy governs dimension resolution.
///
/// Serializes to the single-letter tags understood by the image service.
/// The sizing-axis tags (`w`, `h`) and the transform tags (`c`, `f`) share
/// one namespace on the wire, so they are kept as distinct variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingMode {
    WidthOnly,
    HeightOnly,
    Crop,
    Fit,
}

impl ProcessingMode {
    /// Select the mode from which dimensions are present.
    ///
    /// The transform selector only matters when both are present; a single
    /// dimension always wins over it. With neither present the transform's
    /// own mode is used.
    pub fn select(has_width: bool, has_height: bool, transform: Transform) -> Self {
        match (has_width, has_height) {
            (true, false) => ProcessingMode::WidthOnly,
            (false, true) => ProcessingMode::HeightOnly,
            _ => transform.into(),
        }
    }

    pub fn for_params(params: &RequestParameters) -> Self {
        Self::select(
            params.width.is_some(),
            params.height.is_some(),
            params.transform,
        )
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ProcessingMode::WidthOnly => "w",
            ProcessingMode::HeightOnly => "h",
            ProcessingMode::Crop => Transform::Crop.tag(),
            ProcessingMode::Fit => Transform::Fit.tag(),
        }
    }

    /// Whether both dimensions end up in the size spec
    pub fn is_two_dimensional(&self) -> bool {
        matches!(self, ProcessingMode::Crop | ProcessingMode::Fit)
    }
}

impl From<Transform> for ProcessingMode {
    fn from(transform: Transform) -> Self {
        match transform {
            Transform::Crop => ProcessingMode::Crop,
            Transform::Fit => ProcessingMode::Fit,
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
