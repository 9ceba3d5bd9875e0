//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Search endpoint settings
    #[serde(default)]
    pub search: SearchConfig,

    /// User-Agent catalog settings
    #[serde(default)]
    pub user_agent: UserAgentConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Override values from environment variables.
    ///
    /// Recognized: `SEARCH_URL`, `USER_AGENTS_URL`, `USER_AGENT`,
    /// `HTTP_TIMEOUT_SECS`. Unparseable numbers are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("SEARCH_URL") {
            self.search.url = url;
        }

        if let Some(url) = lookup("USER_AGENTS_URL") {
            self.user_agent.catalog_url = url;
        }

        if let Some(agent) = lookup("USER_AGENT") {
            self.user_agent.fixed = Some(agent);
        }

        if let Some(timeout) = lookup("HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.http.timeout_secs = secs;
            }
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        Url::parse(&self.search.url)
            .map_err(|e| AppError::validation(format!("search.url is invalid: {e}")))?;
        Url::parse(&self.user_agent.catalog_url).map_err(|e| {
            AppError::validation(format!("user_agent.catalog_url is invalid: {e}"))
        })?;
        if let Some(fixed) = &self.user_agent.fixed {
            if fixed.trim().is_empty() {
                return Err(AppError::validation("user_agent.fixed is empty"));
            }
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search page URL; query parameters are replaced on each request
    #[serde(default = "defaults::search_url")]
    pub url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: defaults::search_url(),
        }
    }
}

/// User-Agent selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAgentConfig {
    /// Gzip-compressed JSON catalog of weighted user agents
    #[serde(default = "defaults::catalog_url")]
    pub catalog_url: String,

    /// Pin a User-Agent and skip the catalog entirely
    #[serde(default)]
    pub fixed: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            catalog_url: defaults::catalog_url(),
            fixed: None,
        }
    }
}

mod defaults {
    pub fn timeout() -> u64 {
        15
    }
    pub fn search_url() -> String {
        "https://knowyourmeme.com/search".into()
    }
    pub fn catalog_url() -> String {
        "https://github.com/intoli/user-agents/raw/master/src/user-agents.json.gz".into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_search_url() {
        let mut config = Config::default();
        config.search.url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_fixed_user_agent() {
        let mut config = Config::default();
        config.user_agent.fixed = Some("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\ntimeout_secs = 3").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.search.url, "https://knowyourmeme.com/search");
        assert!(config.user_agent.fixed.is_none());
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/kym.toml");
        assert_eq!(config.http.timeout_secs, 15);
    }

    #[test]
    fn overrides_replace_values() {
        let vars: HashMap<&str, &str> = [
            ("SEARCH_URL", "http://localhost:9000/search"),
            ("USER_AGENT", "Agent/1.0"),
            ("HTTP_TIMEOUT_SECS", "nope"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.search.url, "http://localhost:9000/search");
        assert_eq!(config.user_agent.fixed.as_deref(), Some("Agent/1.0"));
        assert_eq!(config.http.timeout_secs, 15);
    }
}
