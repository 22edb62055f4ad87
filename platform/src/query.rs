//! Table-read query builder for the platform's REST data API.
//!
//! A [`TableQuery`] renders to the PostgREST parameter convention:
//! `select=<cols>`, one `<col>=eq.<value>` per filter, `order=<col>.<dir>`,
//! `limit=<n>`. Parameters always render in that order so request logs and
//! tests see a stable shape.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Most-recent audit records fetched per query.
pub const AUDIT_LOG_LIMIT: usize = 100;

pub const AUDIT_LOG_TABLE: &str = "audit_logs";
pub const ENTITY_ROUTES_TABLE: &str = "entity_routes";

/// Sort direction for [`TableQuery::order`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A read against a single table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
    limit: Option<usize>,
}

impl TableQuery {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), select: "*".to_owned(), filters: Vec::new(), order: None, limit: None }
    }

    #[must_use]
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    /// Add an equality filter. Filters accumulate in call order.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Value of the equality filter on `column`, if one was added.
    #[must_use]
    pub fn filter_value(&self, column: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// REST path for the table, e.g. `/rest/v1/audit_logs`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }

    /// Query-string pairs in render order.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 3);
        pairs.push(("select".to_owned(), self.select.clone()));
        for (column, value) in &self.filters {
            pairs.push((column.clone(), format!("eq.{value}")));
        }
        if let Some((column, direction)) = &self.order {
            pairs.push(("order".to_owned(), format!("{column}.{}", direction.as_str())));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }
}

/// The 100 most recent audit records, filtered to `tenant` when one is given.
#[must_use]
pub fn audit_log_query(tenant: Option<&str>) -> TableQuery {
    let query = TableQuery::new(AUDIT_LOG_TABLE);
    let query = match tenant {
        Some(tenant_id) => query.eq("tenant_id", tenant_id),
        None => query,
    };
    query.order("created_at", Direction::Descending).limit(AUDIT_LOG_LIMIT)
}

/// Active menu routes in display order, filtered to `tenant` when one is given.
#[must_use]
pub fn entity_routes_query(tenant: Option<&str>) -> TableQuery {
    let query = TableQuery::new(ENTITY_ROUTES_TABLE).eq("is_active", "true");
    let query = match tenant {
        Some(tenant_id) => query.eq("tenant_id", tenant_id),
        None => query,
    };
    query.order("order_index", Direction::Ascending)
}
