//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::country::Country;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default country code for searches
    #[serde(default = "default_country")]
    pub country: String,

    /// Google Custom Search API key
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Google Programmable Search Engine ID
    #[serde(default)]
    pub google_cse_id: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Per-page fetch timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Search API request timeout in seconds
    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,

    /// Pause between successive search API calls in milliseconds
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Product pages fetched at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Fall back to scanning every span for a price
    #[serde(default = "default_generic_fallback")]
    pub generic_fallback: bool,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_country() -> String {
    Country::default().code().to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_search_timeout_secs() -> u64 {
    15
}

fn default_search_delay_ms() -> u64 {
    100
}

fn default_concurrency() -> usize {
    1
}

fn default_generic_fallback() -> bool {
    true
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country: default_country(),
            google_api_key: None,
            google_cse_id: None,
            proxy: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
            search_timeout_secs: default_search_timeout_secs(),
            search_delay_ms: default_search_delay_ms(),
            concurrency: default_concurrency(),
            generic_fallback: default_generic_fallback(),
            port: default_port(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("price-scout").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(country) = std::env::var("SCOUT_COUNTRY") {
            if let Ok(c) = country.parse::<Country>() {
                self.country = c.code().to_string();
            }
        }

        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            if !key.is_empty() {
                self.google_api_key = Some(key);
            }
        }

        if let Ok(cx) = std::env::var("GOOGLE_CSE_ID") {
            if !cx.is_empty() {
                self.google_cse_id = Some(cx);
            }
        }

        if let Ok(proxy) = std::env::var("SCOUT_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("SCOUT_DELAY") {
            if let Ok(d) = delay.parse() {
                self.search_delay_ms = d;
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Runs `f` with the given env vars set, restoring previous values afterwards.
    fn with_vars(vars: &[(&str, &str)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, std::env::var(k).ok())).collect();
        for (k, v) in vars {
            std::env::set_var(k, v);
        }

        f();

        for (k, orig) in saved {
            match orig {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.country, "US");
        assert!(config.google_api_key.is_none());
        assert!(config.google_cse_id.is_none());
        assert!(config.proxy.is_none());
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.search_timeout_secs, 15);
        assert_eq!(config.search_delay_ms, 100);
        assert_eq!(config.concurrency, 1);
        assert!(config.generic_fallback);
        assert_eq!(config.port, 8080);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
        assert!(err.contains("table, json, markdown, csv"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            country = "IN"
            concurrency = 4
            generic_fallback = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.country, "IN");
        assert_eq!(config.concurrency, 4);
        assert!(!config.generic_fallback);
        assert_eq!(config.search_delay_ms, 100);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            country = "UK"
            google_api_key = "key-123"
            google_cse_id = "cx-456"
            proxy = "socks5://localhost:1080"
            fetch_timeout_secs = 20
            search_timeout_secs = 30
            search_delay_ms = 250
            concurrency = 8
            generic_fallback = false
            port = 9000
            format = "csv"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.country, "UK");
        assert_eq!(config.google_api_key.as_deref(), Some("key-123"));
        assert_eq!(config.google_cse_id.as_deref(), Some("cx-456"));
        assert_eq!(config.proxy.as_deref(), Some("socks5://localhost:1080"));
        assert_eq!(config.fetch_timeout_secs, 20);
        assert_eq!(config.search_timeout_secs, 30);
        assert_eq!(config.search_delay_ms, 250);
        assert_eq!(config.concurrency, 8);
        assert!(!config.generic_fallback);
        assert_eq!(config.port, 9000);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            country = "AU"
            search_delay_ms = 0
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.country, "AU");
        assert_eq!(config.search_delay_ms, 0);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let err = Config::from_file("/nonexistent/path/config.toml").unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            country = "CA"
            port = 3000
            "#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.country, "CA");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_config_with_env() {
        with_vars(
            &[
                ("SCOUT_COUNTRY", "india"),
                ("GOOGLE_API_KEY", "env-key"),
                ("GOOGLE_CSE_ID", "env-cx"),
                ("SCOUT_PROXY", "http://proxy:8080"),
                ("SCOUT_DELAY", "500"),
                ("PORT", "9090"),
            ],
            || {
                let config = Config::new().with_env();
                assert_eq!(config.country, "IN");
                assert_eq!(config.google_api_key.as_deref(), Some("env-key"));
                assert_eq!(config.google_cse_id.as_deref(), Some("env-cx"));
                assert_eq!(config.proxy.as_deref(), Some("http://proxy:8080"));
                assert_eq!(config.search_delay_ms, 500);
                assert_eq!(config.port, 9090);
            },
        );
    }

    #[test]
    fn test_config_with_env_invalid_values() {
        with_vars(
            &[("SCOUT_COUNTRY", "atlantis"), ("SCOUT_DELAY", "soon"), ("PORT", "99999")],
            || {
                // Invalid values are ignored
                let config = Config::new().with_env();
                assert_eq!(config.country, "US");
                assert_eq!(config.search_delay_ms, 100);
                assert_eq!(config.port, 8080);
            },
        );
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            country: "CA".to_string(),
            google_api_key: Some("k".to_string()),
            concurrency: 3,
            format: OutputFormat::Json,
            ..Config::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.country, config.country);
        assert_eq!(parsed.google_api_key, config.google_api_key);
        assert_eq!(parsed.concurrency, config.concurrency);
        assert_eq!(parsed.format, config.format);
    }
}
