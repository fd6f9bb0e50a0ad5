// Client configuration. The environment is read here, once, by whoever
// bootstraps the application; `EntryClient` only ever sees an `ApiConfig`.

use url::Url;

use crate::error::{ApiError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Environment variable holding the API base URL.
    pub const ENV_VAR: &'static str = "FAVORITES_API_URL";

    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000/api";

    /// Parse an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::UnsupportedBaseUrl(base_url.to_string()));
        }
        Ok(ApiConfig { base_url: parsed })
    }

    /// Resolve the base URL from `FAVORITES_API_URL`, falling back to
    /// `http://localhost:5000/api` when it is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same resolution as `from_env`, over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(Self::ENV_VAR) {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => {
                tracing::debug!(
                    "{} not set, using {}",
                    Self::ENV_VAR,
                    Self::DEFAULT_BASE_URL
                );
                Self::new(Self::DEFAULT_BASE_URL)
            }
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
