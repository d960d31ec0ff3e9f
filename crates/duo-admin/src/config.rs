//! Client configuration.
//!
//! Configuration can come from a TOML file:
//!
//! ```toml
//! host = "api-xxxxxxxx.duosecurity.com"
//! integration_key = "DIXXXXXXXXXXXXXXXXXX"
//! secret_key = "..."
//! account_id = "DA0123456789ABCDEF01"   # optional, for child accounts
//! timeout_secs = 30
//! ```
//!
//! or from the environment (`DUO_HOST`, `DUO_IKEY`, `DUO_SKEY`, and optionally
//! `DUO_ACCOUNT_ID` and `DUO_BASE_URL`).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{AdminClient, ClientBuilder};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required environment variable is not set.
    #[error("environment variable {0} not set")]
    MissingEnv(&'static str),

    /// Missing required field.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Other invalid configuration.
    #[error("{0}")]
    Invalid(String),
}

/// Connection settings for an [`AdminClient`].
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API host name, e.g. `api-xxxxxxxx.duosecurity.com`.
    pub host: String,

    /// Integration key.
    pub integration_key: String,

    /// Secret key.
    pub secret_key: String,

    /// Child account to act on, for accounts-API parents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Override the URL requests are sent to. Defaults to `https://{host}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Create a config with the required fields.
    pub fn new(
        host: impl Into<String>,
        integration_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            integration_key: integration_key.into(),
            secret_key: secret_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ..Default::default()
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load from `DUO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load from `DUO_*` variables resolved through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnv(name));

        let mut config = Self::new(
            required("DUO_HOST")?,
            required("DUO_IKEY")?,
            required("DUO_SKEY")?,
        );
        config.account_id = lookup("DUO_ACCOUNT_ID");
        config.base_url = lookup("DUO_BASE_URL");
        if let Some(timeout) = lookup("DUO_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("DUO_TIMEOUT_SECS: `{timeout}`")))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that required fields are non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingField("host"));
        }
        if self.integration_key.trim().is_empty() {
            return Err(ConfigError::MissingField("integration_key"));
        }
        if self.secret_key.is_empty() {
            return Err(ConfigError::MissingField("secret_key"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// A builder pre-populated from this config.
    pub fn builder(&self) -> ClientBuilder {
        let mut builder = AdminClient::builder()
            .host(&self.host)
            .credentials(&self.integration_key, &self.secret_key)
            .timeout(self.timeout());
        if let Some(account_id) = &self.account_id {
            builder = builder.account_id(account_id);
        }
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder
    }

    /// Build a client from this config.
    pub fn build(&self) -> crate::Result<AdminClient> {
        self.validate()?;
        self.builder().build()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("integration_key", &self.integration_key)
            .field("secret_key", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    const SAMPLE: &str = r#"
host = "api-abc123.duosecurity.com"
integration_key = "DIWJ8X6AEYOR5OMC6TQ1"
secret_key = "Zh5eGmUq9zpfQnyUIu5OL9iWoMMv5ZNmk3zLJ4Ep"
account_id = "DA9VZOC2VI6UMWGHRUEF"
"#;

    #[test]
    fn test_parse_toml() {
        let config = ClientConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.host, "api-abc123.duosecurity.com");
        assert_eq!(config.account_id.as_deref(), Some("DA9VZOC2VI6UMWGHRUEF"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = ClientConfig::from_toml("host = \"h\"\nintegration_key = \"i\"\nsecret_key = \"\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("secret_key")));

        assert!(matches!(
            ClientConfig::from_toml("host = \"h\"").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.integration_key, "DIWJ8X6AEYOR5OMC6TQ1");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_from_env_with() {
        let vars: HashMap<&str, &str> = [
            ("DUO_HOST", "api-abc123.duosecurity.com"),
            ("DUO_IKEY", "DIWJ8X6AEYOR5OMC6TQ1"),
            ("DUO_SKEY", "secret"),
            ("DUO_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_env_with(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.account_id.is_none());
    }

    #[test]
    fn test_from_env_missing_variable() {
        let err = ClientConfig::from_env_with(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("DUO_HOST")));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::from_toml(SAMPLE).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("Zh5eGmUq"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_build_client() {
        let client = ClientConfig::from_toml(SAMPLE).unwrap().build().unwrap();
        assert_eq!(client.host(), "api-abc123.duosecurity.com");
        assert_eq!(client.account_id(), Some("DA9VZOC2VI6UMWGHRUEF"));
    }
}
