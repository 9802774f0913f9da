//! Command-line interface definitions using clap

use clap::Parser;

use shortly::config::StaticConfig;

/// Shortly - terminal client for a URL shortening service
#[derive(Parser, Debug)]
#[command(name = "shortly")]
#[command(version)]
#[command(about = "Terminal client for a URL shortening service", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./shortly.toml when present)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Backend base URL, overrides api.base_url
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to open at startup: /, /links or /links/<slug>
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Cli {
    /// CLI flags take precedence over file and environment
    pub fn apply_overrides(&self, config: &mut StaticConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["shortly"]).unwrap();
        assert_eq!(cli.route, "/");
        assert!(cli.config.is_none());
        assert!(!cli.generate_config);
    }

    #[test]
    fn test_base_url_override() {
        let cli = Cli::try_parse_from([
            "shortly",
            "-c",
            "custom.toml",
            "--base-url",
            "https://api.example.com",
            "--route",
            "/links",
        ])
        .unwrap();
        let mut config = StaticConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.route, "/links");
    }

    #[test]
    fn test_base_url_override_fixes_invalid_config() {
        let cli = Cli::try_parse_from(["shortly", "--base-url", "http://localhost:4000"]).unwrap();
        let mut config = StaticConfig::default();
        config.api.base_url = "not a url".into();
        assert!(config.validate().is_err());

        cli.apply_overrides(&mut config);
        config.validate().unwrap();
    }
}
