use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Remote table-store settings. The remote provider is chosen only when
/// `enabled` is set AND both credentials are present; anything less keeps
/// the board on the local snapshot file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    /// Base URL of the table API (e.g. "https://xyz.example.co")
    pub url: Option<String>,
    /// Service key sent as both the api key and the bearer token
    pub service_key: Option<String>,
}

impl RemoteConfig {
    /// The credentials, if and only if the remote provider should be used.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if !self.enabled {
            return None;
        }
        match (self.url.as_deref(), self.service_key.as_deref()) {
            (Some(url), Some(key)) if !url.trim().is_empty() && !key.trim().is_empty() => {
                Some((url, key))
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = self.url.as_deref()
            && !url.trim().is_empty()
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(ConfigError::remote(format!(
                "remote.url must be an http(s) URL, got '{url}'"
            )));
        }

        Ok(())
    }
}
