//! Configuration management for meater-cloud.
//!
//! Configuration is read from an optional TOML file. Every section has
//! defaults matching the iOS app build the private API expects, and a small
//! set of environment variables can override individual fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.cloud.meater.com";
pub const DEFAULT_PUBLIC_API_URL: &str = "https://public-api.cloud.meater.com";
pub const DEFAULT_SESSION_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppIdentity,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Endpoints and transport settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    #[serde(default = "default_public_api_url")]
    pub public_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// The app and phone the client presents itself as.
///
/// The private API only accepts requests that look like they come from the
/// mobile app, so these values end up in the user agent and login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppIdentity {
    #[serde(default = "default_app_version")]
    pub version: String,
    #[serde(default = "default_app_build")]
    pub build: String,
    #[serde(default = "default_os_name")]
    pub os_name: String,
    #[serde(default = "default_os_version")]
    pub os_version: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_cfnetwork")]
    pub cfnetwork: String,
    #[serde(default = "default_darwin")]
    pub darwin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_public_api_url() -> String {
    DEFAULT_PUBLIC_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_app_version() -> String {
    "4.4.2".to_string()
}

fn default_app_build() -> String {
    "12305".to_string()
}

fn default_os_name() -> String {
    "iOS".to_string()
}

fn default_os_version() -> String {
    "18.2".to_string()
}

fn default_model() -> String {
    "iPhone".to_string()
}

fn default_locale() -> String {
    "de_DE".to_string()
}

fn default_cfnetwork() -> String {
    "1568.300.101".to_string()
}

fn default_darwin() -> String {
    "24.2.0".to_string()
}

fn default_session_path() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_FILE)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            public_base_url: default_public_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            version: default_app_version(),
            build: default_app_build(),
            os_name: default_os_name(),
            os_version: default_os_version(),
            model: default_model(),
            locale: default_locale(),
            cfnetwork: default_cfnetwork(),
            darwin: default_darwin(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

impl AppIdentity {
    /// `User-Agent` header sent with every request
    pub fn user_agent(&self) -> String {
        format!(
            "MEATER/{} CFNetwork/{} Darwin/{}",
            self.build, self.cfnetwork, self.darwin
        )
    }

    /// `clientVersion` field of the login payload
    pub fn client_version(&self) -> String {
        format!("MEATER-{}-v{}", self.os_name, self.version)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load `path` when given, otherwise start from defaults, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Empty values are ignored; an unparsable timeout is ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup("MEATER_API_URL") {
            self.api.base_url = url;
        }

        if let Some(url) = lookup("MEATER_PUBLIC_API_URL") {
            self.api.public_base_url = url;
        }

        if let Some(timeout) = lookup("MEATER_TIMEOUT_SECS") {
            if let Ok(parsed) = timeout.trim().parse::<u64>() {
                self.api.timeout_secs = parsed;
            }
        }

        if let Some(path) = lookup("MEATER_SESSION_PATH") {
            self.session.path = PathBuf::from(path);
        }

        if let Some(locale) = lookup("MEATER_LOCALE") {
            self.app.locale = locale;
        }

        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_url("api.base_url", &self.api.base_url)?;
        validate_http_url("api.public_base_url", &self.api.public_base_url)?;

        if self.api.timeout_secs == 0 {
            return Err(Error::Validation(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.app.version.trim().is_empty() || self.app.build.trim().is_empty() {
            return Err(Error::Validation(
                "app.version and app.build must not be empty".to_string(),
            ));
        }

        if self.session.path.as_os_str().is_empty() {
            return Err(Error::Validation("session.path must not be empty".to_string()));
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = url::Url::parse(value)
        .map_err(|e| Error::Validation(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Validation(format!(
            "{} must use http:// or https:// protocol",
            field
        )));
    }

    Ok(())
}
