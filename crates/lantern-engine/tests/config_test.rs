use std::io::Write;

use lantern_engine::config::{ClassifierConfig, ConfigLoader};

#[test]
fn defaults_point_at_deepseek() {
    let config = ClassifierConfig::default();
    assert_eq!(config.base_url, "https://api.deepseek.com");
    assert_eq!(config.model, "deepseek-chat");
    assert!((config.temperature - 0.2).abs() < 1e-6);
    assert_eq!(config.timeout_secs, 30);
    assert!(config.api_key.is_empty());
}

#[tokio::test]
async fn loads_yaml_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "classifier:").unwrap();
    writeln!(file, "  model: test-model").unwrap();
    writeln!(file, "  timeout_secs: 5").unwrap();
    file.flush().unwrap();

    let config = ConfigLoader::load_from(file.path()).await.unwrap();
    assert_eq!(config.classifier.model, "test-model");
    assert_eq!(config.classifier.timeout_secs, 5);
    // Unspecified fields keep their defaults.
    assert_eq!(config.classifier.base_url, "https://api.deepseek.com");
    assert!((config.classifier.temperature - 0.2).abs() < 1e-6);
}

#[tokio::test]
async fn malformed_yaml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "classifier: [not, a, map").unwrap();
    file.flush().unwrap();

    assert!(ConfigLoader::load_from(file.path()).await.is_err());
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    assert!(ConfigLoader::load_from(&path).await.is_err());
}
