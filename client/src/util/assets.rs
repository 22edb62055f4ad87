//! Static asset URL resolution against the configured base path.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Absolute URL for `file` under `base_path` (already normalized, no
/// trailing slash).
#[must_use]
pub fn asset_url(base_path: &str, file: &str) -> String {
    format!("{base_path}/{}", file.trim_start_matches('/'))
}
