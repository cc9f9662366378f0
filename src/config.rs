//! Configuration Module
//!
//! Handles loading server configuration from environment variables (and an
//! optional `.env` file), with command-line overrides.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::cache::DEFAULT_TIMEOUT_SECS;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5173;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long a cached upstream response stays fresh
    pub cache_timeout: Duration,
    /// HTTP server port
    pub server_port: u16,
    /// Directory holding the MotoGP calendar file
    pub data_dir: PathBuf,
    /// Canned responses served in test mode
    pub fixtures_path: PathBuf,
    /// WeatherAPI key
    pub weather_api_key: Option<String>,
    /// API Ninjas key (crypto prices)
    pub api_ninjas_key: Option<String>,
    /// GNews key (headlines)
    pub gnews_api_key: Option<String>,
    /// Serve canned fixture data instead of calling providers
    pub test_mode: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Environment Variables
    /// - `CACHE_TIMEOUT` - Cache freshness in seconds (default: 1800)
    /// - `SERVER_PORT` - HTTP server port (default: 5173)
    /// - `DATA_DIR` - Calendar data directory (default: data)
    /// - `FIXTURES_PATH` - Test mode responses (default: testdata/test_responses.json)
    /// - `WEATHER_API_KEY`, `API_NINJAS_KEY`, `GNEWS_API_KEY` - Provider keys
    /// - `TEST_MODE` - `1` or `true` to serve fixtures
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Unset, empty and unparseable values fall back to the defaults. A
    /// negative `CACHE_TIMEOUT` does not parse as seconds and also falls back.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            cache_timeout: var("CACHE_TIMEOUT")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_timeout),
            server_port: var("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            fixtures_path: var("FIXTURES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.fixtures_path),
            weather_api_key: var("WEATHER_API_KEY"),
            api_ninjas_key: var("API_NINJAS_KEY"),
            gnews_api_key: var("GNEWS_API_KEY"),
            test_mode: var("TEST_MODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.test_mode),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.test_mode {
            self.test_mode = true;
        }
        if let Some(port) = cli.port {
            self.server_port = port;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            server_port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            fixtures_path: PathBuf::from("testdata/test_responses.json"),
            weather_api_key: None,
            api_ninjas_key: None,
            gnews_api_key: None,
            test_mode: false,
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "daysync-api")]
#[command(about = "Caching aggregation API for weather, crypto, news and MotoGP data")]
#[command(version)]
pub struct Cli {
    /// Serve canned fixture data instead of calling upstream providers
    #[arg(long)]
    pub test_mode: bool,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_timeout, Duration::from_secs(1800));
        assert_eq!(config.server_port, 5173);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.weather_api_key.is_none());
        assert!(!config.test_mode);
    }

    #[test]
    fn test_config_from_empty_lookup_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.cache_timeout, Duration::from_secs(1800));
        assert_eq!(config.server_port, 5173);
        assert_eq!(
            config.fixtures_path,
            PathBuf::from("testdata/test_responses.json")
        );
    }

    #[test]
    fn test_config_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("CACHE_TIMEOUT", "60"),
            ("SERVER_PORT", "8080"),
            ("DATA_DIR", "/srv/data"),
            ("WEATHER_API_KEY", "abc"),
            ("TEST_MODE", "true"),
        ]));

        assert_eq!(config.cache_timeout, Duration::from_secs(60));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.weather_api_key.as_deref(), Some("abc"));
        assert!(config.test_mode);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for bad in ["-5", "soon", "1.5", ""] {
            let config = Config::from_lookup(lookup(&[("CACHE_TIMEOUT", bad)]));
            assert_eq!(config.cache_timeout, Duration::from_secs(1800), "{bad}");
        }
    }

    #[test]
    fn test_zero_timeout_is_accepted() {
        let config = Config::from_lookup(lookup(&[("CACHE_TIMEOUT", "0")]));
        assert_eq!(config.cache_timeout, Duration::ZERO);
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config = Config::from_lookup(lookup(&[("GNEWS_API_KEY", "  ")]));
        assert!(config.gnews_api_key.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["daysync-api", "--test-mode", "--port", "9000"]);
        let config = Config::default().with_cli(&cli);
        assert!(config.test_mode);
        assert_eq!(config.server_port, 9000);
    }

    #[test]
    fn test_cli_without_flags_keeps_env() {
        let cli = Cli::parse_from(["daysync-api"]);
        let config = Config::from_lookup(lookup(&[("SERVER_PORT", "7000")])).with_cli(&cli);
        assert_eq!(config.server_port, 7000);
        assert!(!config.test_mode);
    }
}
