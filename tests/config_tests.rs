//! Configuration loading tests
//!
//! Environment variables are process-wide, so every test that loads
//! configuration holds `ENV_LOCK`.

use std::sync::Mutex;

use shortly::config::{ApiConfig, StaticConfig};
use shortly::errors::ShortlyError;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(dir: &tempfile::TempDir, content: &str) -> String {
    let path = dir.path().join("shortly.toml");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_load_from_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://sho.rt"
timeout_secs = 3

[api.headers]
x-api-key = "secret"

[logging]
level = "debug"
file = ""
"#,
    );

    let config = StaticConfig::load(Some(&path)).unwrap();
    assert_eq!(config.api.base_url, "https://sho.rt");
    assert_eq!(config.api.timeout_secs, Some(3));
    assert_eq!(
        config.api.headers.get("x-api-key").map(String::as_str),
        Some("secret")
    );
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_empty());
    // untouched keys keep their defaults
    assert_eq!(config.logging.format, "text");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = StaticConfig::load(Some(&path.to_string_lossy())).unwrap_err();
    assert!(matches!(err, ShortlyError::ConfigLoad(_)));
}

#[test]
fn test_invalid_base_url_loads_then_fails_validation() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"not a url\"\n");

    let config = StaticConfig::load(Some(&path)).unwrap();
    assert_eq!(config.api.base_url, "not a url");

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ShortlyError::ConfigInvalid(_)));
    assert_eq!(err.code(), "E002");
}

#[test]
fn test_command_line_base_url_rescues_bad_file_value() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"not a url\"\n");

    let mut config = StaticConfig::load(Some(&path)).unwrap();
    // what `--base-url` does before the binary validates
    config.api.base_url = "http://localhost:4000".into();
    config.validate().unwrap();
}

#[test]
fn test_env_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"https://from-file.example\"\n");

    // SAFETY: serialized by ENV_LOCK; no other thread reads these variables
    unsafe {
        std::env::set_var("SHORTLY__API__BASE_URL", "https://from-env.example");
        std::env::set_var("SHORTLY__API__TIMEOUT_SECS", "7");
    }
    let result = StaticConfig::load(Some(&path));
    unsafe {
        std::env::remove_var("SHORTLY__API__BASE_URL");
        std::env::remove_var("SHORTLY__API__TIMEOUT_SECS");
    }

    let config = result.unwrap();
    assert_eq!(config.api.base_url, "https://from-env.example");
    assert_eq!(config.api.timeout_secs, Some(7));
}

#[test]
fn test_save_then_load() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("shortly.toml");

    let mut config = StaticConfig {
        api: ApiConfig {
            base_url: "http://10.0.0.5:8080".into(),
            timeout_secs: Some(12),
            ..ApiConfig::default()
        },
        ..StaticConfig::default()
    };
    config.logging.format = "json".into();
    config.save_to_file(&path).unwrap();

    let loaded = StaticConfig::load(Some(&path.to_string_lossy())).unwrap();
    assert_eq!(loaded, config);
}
