// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::rewrite::params::{Quality, Transform};

/// Process-wide rewrite constants.
///
/// Built once at startup and shared read-only; every rewrite function takes
/// it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Canonical sizes, in matching order. The first window containing a
    /// requested value wins, so order matters where windows overlap.
    #[serde(default = "default_allowed_dimensions")]
    pub allowed_dimensions: Vec<u32>,

    /// Size used when a value matches no allowed size
    #[serde(default = "default_dimension")]
    pub default_dimension: u32,

    /// Fractional tolerance around each allowed size (0.2 = ±20%)
    #[serde(default = "default_variance")]
    pub variance: f64,

    #[serde(default)]
    pub default_transform: Transform,

    #[serde(default)]
    pub default_quality: Quality,

    /// Substring of the Accept header signalling WebP support; also used as
    /// the format segment
    #[serde(default = "default_webp_token")]
    pub webp_token: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            allowed_dimensions: default_allowed_dimensions(),
            default_dimension: default_dimension(),
            variance: default_variance(),
            default_transform: Transform::default(),
            default_quality: Quality::default(),
            webp_token: default_webp_token(),
        }
    }
}

fn default_allowed_dimensions() -> Vec<u32> {
    vec![16, 64, 240, 360, 640, 960, 1280, 1920]
}

fn default_dimension() -> u32 {
    360
}

fn default_variance() -> f64 {
    0.2
}

fn default_webp_token() -> String {
    "webp".to_string()
}

impl RewriteConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        let mut missing: Option<String> = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            })
        });

        if let Some(var_name) = missing {
            return Err(format!(
                "Environment variable '{}' is referenced but not set",
                var_name
            ));
        }

        serde_yaml::from_str(&substituted).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_dimensions.is_empty() {
            return Err("allowed_dimensions cannot be empty".to_string());
        }

        let mut seen = HashSet::new();
        for &size in &self.allowed_dimensions {
            if size == 0 {
                return Err("allowed_dimensions must be greater than 0".to_string());
            }
            if !seen.insert(size) {
                return Err(format!(
                    "Duplicate size {} found in allowed_dimensions",
                    size
                ));
            }
        }

        if self.default_dimension == 0 {
            return Err("default_dimension must be greater than 0".to_string());
        }

        if !self.variance.is_finite() || !(0.0..1.0).contains(&self.variance) {
            return Err(format!(
                "variance must be in [0, 1), got {}",
                self.variance
            ));
        }

        if self.webp_token.trim().is_empty() {
            return Err("webp_token cannot be empty".to_string());
        }

        Ok(())
    }
}
