//! Build-time browser configuration.
//!
//! The WASM bundle has no process environment, so platform coordinates and
//! the static asset base path are baked in at compile time from
//! `DASHBOARD_PLATFORM_URL`, `DASHBOARD_PLATFORM_ANON_KEY`, and
//! `DASHBOARD_BASE_PATH`. Unset values fall back to a local platform.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use platform::PlatformConfig;

pub const DEFAULT_PLATFORM_URL: &str = "http://127.0.0.1:54321";

/// Shared client configuration, provided via context at the app root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub platform: PlatformConfig,
    /// Prefix for static assets, without a trailing slash (`""` for root).
    pub base_path: String,
}

impl ClientConfig {
    /// Configuration compiled into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("DASHBOARD_PLATFORM_URL"),
            option_env!("DASHBOARD_PLATFORM_ANON_KEY"),
            option_env!("DASHBOARD_BASE_PATH"),
        )
    }

    #[must_use]
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>, base_path: Option<&str>) -> Self {
        Self {
            platform: PlatformConfig::new(url.unwrap_or(DEFAULT_PLATFORM_URL), anon_key.unwrap_or_default()),
            base_path: normalize_base_path(base_path.unwrap_or_default()),
        }
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{trimmed}")
}
