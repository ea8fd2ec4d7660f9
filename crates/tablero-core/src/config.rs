use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{env, DEFAULT_FEED_URL, DEFAULT_REFRESH_INTERVAL, DEFAULT_REQUEST_TIMEOUT};

/// Resolved dashboard settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub feed_url: String,
    /// Also the cache TTL
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// On-disk config, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Command-line overrides, applied last
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub feed_url: Option<String>,
    pub refresh_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// `<config_dir>/tablero/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tablero").join("config.json"))
}

impl DashboardConfig {
    /// Defaults, then the config file, then the environment, then `overrides`.
    ///
    /// An explicit `path` must exist; the default location is only read when present.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let file = match path {
            Some(path) => Some(FileConfig::load(path)?),
            None => match default_config_path() {
                Some(default) if default.exists() => Some(FileConfig::load(&default)?),
                _ => None,
            },
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(&file);
        }
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.apply_overrides(overrides);
        config.validate()?;

        debug!(
            feed_url = %config.feed_url,
            refresh_secs = config.refresh_interval.as_secs(),
            timeout_secs = config.request_timeout.as_secs(),
            "configuration resolved"
        );
        Ok(config)
    }

    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(url) = &file.feed_url {
            self.feed_url = url.clone();
        }
        if let Some(secs) = file.refresh_seconds {
            self.refresh_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = file.timeout_seconds {
            self.request_timeout = Duration::from_secs(secs);
        }
    }

    /// Apply `TABLERO_*` variables as reported by `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env::FEED_URL) {
            self.feed_url = url;
        }
        if let Some(raw) = lookup(env::REFRESH_SECS) {
            self.refresh_interval = Duration::from_secs(parse_secs(env::REFRESH_SECS, &raw)?);
        }
        if let Some(raw) = lookup(env::TIMEOUT_SECS) {
            self.request_timeout = Duration::from_secs(parse_secs(env::TIMEOUT_SECS, &raw)?);
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.feed_url {
            self.feed_url = url.clone();
        }
        if let Some(secs) = overrides.refresh_secs {
            self.refresh_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = overrides.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.feed_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("Feed URL must be http:// or https://, got {:?}", self.feed_url);
        }
        if self.refresh_interval < Duration::from_secs(1) {
            bail!("Refresh interval must be at least 1 second");
        }
        if self.request_timeout < Duration::from_secs(1) {
            bail!("Request timeout must be at least 1 second");
        }
        Ok(())
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("{key} must be a whole number of seconds, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_file_config_camel_case() {
        let json = r#"{"feedUrl": "https://example.com/agents", "refreshSeconds": 30}"#;
        let file: FileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(file.feed_url.as_deref(), Some("https://example.com/agents"));
        assert_eq!(file.refresh_seconds, Some(30));
        assert!(file.timeout_seconds.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"feedUrl": "http://localhost:9000/feed", "timeoutSeconds": 3}}"#).unwrap();

        let config = DashboardConfig::load(Some(file.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.feed_url, "http://localhost:9000/feed");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = DashboardConfig::load(Some(&missing), &ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_layering_order() {
        let mut config = DashboardConfig::default();
        config.apply_file(&FileConfig {
            feed_url: Some("https://file.example/feed".into()),
            refresh_seconds: Some(120),
            timeout_seconds: Some(20),
        });
        config
            .apply_env_with(lookup(&[
                (env::FEED_URL, "https://env.example/feed"),
                (env::REFRESH_SECS, "30"),
            ]))
            .unwrap();
        config.apply_overrides(&ConfigOverrides {
            refresh_secs: Some(15),
            ..Default::default()
        });

        assert_eq!(config.feed_url, "https://env.example/feed");
        assert_eq!(config.refresh_interval, Duration::from_secs(15));
        assert_eq!(config.request_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_bad_env_number_is_an_error() {
        let mut config = DashboardConfig::default();
        let err = config
            .apply_env_with(lookup(&[(env::TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(env::TIMEOUT_SECS));
    }

    #[test]
    fn test_validation() {
        let mut config = DashboardConfig::default();
        config.feed_url = "ftp://example.com".into();
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.refresh_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.feed_url = "https://example.com/webhook/".into();
        config.validate().unwrap();
        // Opaque endpoint: the trailing slash is kept
        assert!(config.feed_url.ends_with('/'));
    }
}
