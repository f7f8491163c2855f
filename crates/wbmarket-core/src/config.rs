//! Client configuration.
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `WB_API` | yes | API key sent as the `Authorization` header |
//! | `WB_MARKETPLACE_API_URL` | no | Base URL for supply endpoints |
//! | `WB_SUPPLIES_API_URL` | no | Base URL for warehouse and coefficient endpoints |
//! | `WB_TIMEOUT_MS` | no | Per-request timeout in milliseconds |

use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::error::ValidationError;

pub const DEFAULT_MARKETPLACE_URL: &str = "https://marketplace-api.wildberries.ru/api";
pub const DEFAULT_SUPPLIES_URL: &str = "https://supplies-api.wildberries.ru/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_API_KEY: &str = "WB_API";
pub const ENV_MARKETPLACE_URL: &str = "WB_MARKETPLACE_API_URL";
pub const ENV_SUPPLIES_URL: &str = "WB_SUPPLIES_API_URL";
pub const ENV_TIMEOUT_MS: &str = "WB_TIMEOUT_MS";

/// Seller API token. Formatting never reveals the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Display for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

/// Which vendor host an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHost {
    /// Supplies (FBS orders) endpoints.
    Marketplace,
    /// Warehouse and acceptance coefficient endpoints.
    Supplies,
}

/// Immutable settings handed to [`crate::MarketplaceClient::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub marketplace_url: String,
    pub supplies_url: String,
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            marketplace_url: String::from(DEFAULT_MARKETPLACE_URL),
            supplies_url: String::from(DEFAULT_SUPPLIES_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_marketplace_url(mut self, url: impl Into<String>) -> Self {
        self.marketplace_url = trim_base_url(url.into());
        self
    }

    pub fn with_supplies_url(mut self, url: impl Into<String>) -> Self {
        self.supplies_url = trim_base_url(url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self, host: ApiHost) -> &str {
        match host {
            ApiHost::Marketplace => &self.marketplace_url,
            ApiHost::Supplies => &self.supplies_url,
        }
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads a `.env` file into the process environment, then reads it.
    /// Variables already present in the environment win.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        dotenv::from_path(path.as_ref()).map_err(|error| ValidationError::EnvFile {
            message: error.to_string(),
        })?;
        Self::from_env()
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_key = lookup(ENV_API_KEY).ok_or(ValidationError::MissingEnv { name: ENV_API_KEY })?;
        let mut config = Self::new(ApiKey::parse(&raw_key)?);

        if let Some(url) = non_empty(lookup(ENV_MARKETPLACE_URL)) {
            config = config.with_marketplace_url(url);
        }
        if let Some(url) = non_empty(lookup(ENV_SUPPLIES_URL)) {
            config = config.with_supplies_url(url);
        }
        if let Some(raw) = non_empty(lookup(ENV_TIMEOUT_MS)) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ValidationError::InvalidEnv {
                    name: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                })?;
            config = config.with_timeout_ms(timeout_ms);
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_vendor_hosts() {
        let config = ClientConfig::from_lookup(lookup_from(&[("WB_API", "secret")]))
            .expect("config should load");

        assert_eq!(config.api_key.expose(), "secret");
        assert_eq!(config.base_url(ApiHost::Marketplace), DEFAULT_MARKETPLACE_URL);
        assert_eq!(config.base_url(ApiHost::Supplies), DEFAULT_SUPPLIES_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn overrides_are_applied_and_trailing_slash_removed() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("WB_API", "secret"),
            ("WB_MARKETPLACE_API_URL", "http://127.0.0.1:9000/api/"),
            ("WB_SUPPLIES_API_URL", "http://127.0.0.1:9001/api"),
            ("WB_TIMEOUT_MS", "2500"),
        ]))
        .expect("config should load");

        assert_eq!(config.marketplace_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.supplies_url, "http://127.0.0.1:9001/api");
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let error = ClientConfig::from_lookup(lookup_from(&[])).expect_err("key is required");
        assert_eq!(error, ValidationError::MissingEnv { name: "WB_API" });
    }

    #[test]
    fn blank_key_is_rejected() {
        let error = ClientConfig::from_lookup(lookup_from(&[("WB_API", "   ")]))
            .expect_err("blank key must fail");
        assert_eq!(error, ValidationError::EmptyApiKey);
    }

    #[test]
    fn zero_or_garbage_timeout_is_rejected() {
        for raw in ["0", "soon"] {
            let error = ClientConfig::from_lookup(lookup_from(&[
                ("WB_API", "secret"),
                ("WB_TIMEOUT_MS", raw),
            ]))
            .expect_err("invalid timeout must fail");
            assert!(matches!(error, ValidationError::InvalidEnv { name: "WB_TIMEOUT_MS", .. }));
        }
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = ClientConfig::new(ApiKey::new("very-secret-token"));
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("very-secret-token"));
        assert!(rendered.contains("ApiKey(***)"));
    }

    #[test]
    fn env_file_missing_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = ClientConfig::from_env_file(dir.path().join("absent.env"))
            .expect_err("missing file must fail");
        assert!(matches!(error, ValidationError::EnvFile { .. }));
    }
}
