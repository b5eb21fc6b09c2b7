// Configuration module unit tests

use std::io::Write;

use kirikae::config::RewriteConfig;
use kirikae::rewrite::{Quality, Transform};

#[test]
fn test_can_deserialize_full_yaml_config() {
    let yaml = r#"
allowed_dimensions: [100, 200, 400]
default_dimension: 200
variance: 0.1
default_transform: f
default_quality: l
webp_token: webp
"#;
    let config = RewriteConfig::from_yaml_with_env(yaml).expect("Failed to parse YAML");
    assert_eq!(config.allowed_dimensions, vec![100, 200, 400]);
    assert_eq!(config.default_dimension, 200);
    assert_eq!(config.variance, 0.1);
    assert_eq!(config.default_transform, Transform::Fit);
    assert_eq!(config.default_quality, Quality::Low);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config = RewriteConfig::from_yaml_with_env("variance: 0.05\n").unwrap();
    assert_eq!(config.variance, 0.05);
    assert_eq!(config.default_dimension, 360);
    assert_eq!(config.allowed_dimensions.len(), 8);
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("KIRIKAE_TEST_DEFAULT_DIMENSION", "640");
    let yaml = "default_dimension: ${KIRIKAE_TEST_DEFAULT_DIMENSION}\n";
    let config = RewriteConfig::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.default_dimension, 640);
}

#[test]
fn test_missing_env_var_is_an_error() {
    let yaml = "webp_token: ${KIRIKAE_TEST_UNSET_VARIABLE_XYZ}\n";
    let err = RewriteConfig::from_yaml_with_env(yaml).unwrap_err();
    assert!(err.contains("KIRIKAE_TEST_UNSET_VARIABLE_XYZ"), "{err}");
}

#[test]
fn test_unknown_quality_tag_is_rejected() {
    assert!(RewriteConfig::from_yaml_with_env("default_quality: ultra\n").is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "allowed_dimensions: [32, 64]").unwrap();
    writeln!(file, "default_dimension: 64").unwrap();

    let config = RewriteConfig::from_file(file.path()).unwrap();
    assert_eq!(config.allowed_dimensions, vec![32, 64]);
    assert_eq!(config.default_dimension, 64);
}

#[test]
fn test_from_missing_file() {
    let err = RewriteConfig::from_file("/nonexistent/kirikae.yaml").unwrap_err();
    assert!(err.starts_with("Failed to read config file"), "{err}");
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = RewriteConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("default_transform: c"), "{yaml}");
    assert!(yaml.contains("default_quality: m"), "{yaml}");
    assert_eq!(RewriteConfig::from_yaml_with_env(&yaml).unwrap(), config);
}
