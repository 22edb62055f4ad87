//! Row and auth DTOs exchanged with the backend platform.
//!
//! DESIGN
//! ======
//! Field names mirror the platform's column names so serde maps rows
//! one-to-one. The UI treats every row here as read-only; the platform is
//! the source of truth.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One navigable entity type in a tenant's configured menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRoute {
    /// Row identifier (UUID string).
    pub id: String,
    /// Stable machine key (e.g. `"customers"`).
    pub key: String,
    /// URL segment; unique within a tenant.
    pub slug: String,
    /// Menu label.
    pub label: String,
    /// Icon name understood by the UI, if any.
    #[serde(default)]
    pub icon: Option<String>,
    /// Backing entity type.
    pub entity_type: String,
    /// Inactive routes are hidden from the menu.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display position; lower values come first.
    #[serde(default, deserialize_with = "deserialize_i32_from_number")]
    pub order_index: i32,
    /// Free-form per-route configuration.
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Immutable record of a prior data mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    /// Row identifier (UUID string).
    pub id: String,
    /// Mutation kind (e.g. `"INSERT"`, `"UPDATE"`, `"DELETE"`).
    pub action: String,
    /// Table the mutation touched.
    pub table_name: String,
    /// Primary key of the touched row, if recorded.
    #[serde(default)]
    pub record_id: Option<String>,
    /// Owning tenant, if the row is tenant-scoped.
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Acting user, if known.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Before/after payload as recorded by the platform.
    #[serde(default)]
    pub changes: serde_json::Value,
    /// Creation time as an RFC 3339 string.
    pub created_at: String,
}

/// A user as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl AuthUser {
    /// Name to show in the UI: `user_metadata.full_name`, then email, then id.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user_metadata
            .get("full_name")
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .map(str::to_owned)
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.clone())
    }

    /// Tenant the user belongs to, read from `user_metadata.tenant_id`.
    #[must_use]
    pub fn tenant_id(&self) -> Option<String> {
        self.user_metadata
            .get("tenant_id")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }
}

/// A signed-in session returned by the password grant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: AuthUser,
}

/// Active routes ordered by `order_index`; ties keep their input order.
#[must_use]
pub fn sort_entity_routes(routes: Vec<EntityRoute>) -> Vec<EntityRoute> {
    let mut active: Vec<EntityRoute> = routes.into_iter().filter(|route| route.is_active).collect();
    active.sort_by_key(|route| route.order_index);
    active
}

/// Route whose slug matches exactly.
#[must_use]
pub fn find_entity_route<'a>(routes: &'a [EntityRoute], slug: &str) -> Option<&'a EntityRoute> {
    routes.iter().find(|route| route.slug == slug)
}

fn default_true() -> bool {
    true
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for i32")));
    }
    #[allow(clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= f64::from(i32::MIN)
        && float <= f64::from(i32::MAX)
    {
        return Ok(float as i32);
    }
    Err(D::Error::custom("expected integer-compatible number"))
}
