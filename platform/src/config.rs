//! Platform connection settings parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::PlatformError;

pub const PLATFORM_URL_VAR: &str = "PLATFORM_URL";
pub const PLATFORM_ANON_KEY_VAR: &str = "PLATFORM_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Base URL without a trailing slash.
    pub url: String,
    /// Public API key sent as `apikey` on every request.
    pub anon_key: String,
}

impl PlatformConfig {
    #[must_use]
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self { url: url.trim().trim_end_matches('/').to_owned(), anon_key: anon_key.trim().to_owned() }
    }

    /// Build config from process environment variables.
    ///
    /// Required:
    /// - `PLATFORM_URL`
    /// - `PLATFORM_ANON_KEY`
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::MissingConfig`] naming the first absent or
    /// blank variable.
    pub fn from_env() -> Result<Self, PlatformError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::MissingConfig`] naming the first absent or
    /// blank variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlatformError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, PLATFORM_URL_VAR)?;
        let anon_key = required(&lookup, PLATFORM_ANON_KEY_VAR)?;
        Ok(Self::new(&url, &anon_key))
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, PlatformError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| PlatformError::MissingConfig { var: var.to_owned() })
}
