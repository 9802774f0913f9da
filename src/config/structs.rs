use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{Result, ShortlyError};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "shortly.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "SHORTLY";

/// 静态配置（从 TOML + 环境变量加载，启动时使用）
///
/// - api: backend location and request options, injected into the client
/// - logging: tracing output
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// Load from an optional TOML file and the environment
    ///
    /// When `path` is `None`, `shortly.toml` in the working directory is used
    /// if it exists. An explicitly named file must exist.
    /// ENV prefix: SHORTLY, separator: __ (e.g. `SHORTLY__API__BASE_URL`)
    ///
    /// Values are not checked here; command-line overrides still apply on
    /// top, so callers run [`StaticConfig::validate`] once those are in.
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (file, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(file).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        Ok(config)
    }

    /// Check values the client cannot work without
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ShortlyError::config_invalid(format!(
                "api.base_url '{}' is not a valid URL: {}",
                self.api.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ShortlyError::config_invalid(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ShortlyError::config_invalid(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| ShortlyError::config_load(e.to_string()))?;
        }

        std::fs::write(path, content).map_err(|e| ShortlyError::config_load(e.to_string()))?;
        Ok(())
    }
}

/// Backend API configuration, injected into the HTTP transport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Global request timeout; unset or 0 keeps the HTTP client's defaults
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            headers: BTreeMap::new(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Log file; empty disables logging output (the terminal belongs to the UI)
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> String {
    "shortly.log".to_string()
}

fn default_max_backups() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        StaticConfig::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut cfg = StaticConfig::default();
        cfg.api.base_url = "ftp://example.com".into();
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ShortlyError::ConfigInvalid(_)));
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let mut cfg = StaticConfig::default();
        cfg.api.base_url = "/api".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let mut cfg = StaticConfig::default();
        cfg.logging.format = "xml".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[api]"));
        assert!(sample.contains("base_url"));
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}
