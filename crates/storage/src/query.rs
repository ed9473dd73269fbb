use std::fmt;

/// Sort direction of an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Where null values land in an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Nulls {
    fn as_str(&self) -> &'static str {
        match self {
            Self::First => "nullsfirst",
            Self::Last => "nullslast",
        }
    }
}

/// Builder for a request against one table of the REST data store.
///
/// Renders to PostgREST query parameters: `select`, per-column filters,
/// a single comma-joined `order`, `limit` and `on_conflict`.
///
/// ```
/// use storage::query::{Direction, Nulls, RestQuery};
///
/// let query = RestQuery::table("weeks")
///     .select("id,week_number")
///     .not_null("week_number")
///     .order_nulls("week_number", Direction::Asc, Nulls::Last);
///
/// assert_eq!(
///     query.params(),
///     vec![
///         ("select".to_string(), "id,week_number".to_string()),
///         ("week_number".to_string(), "not.is.null".to_string()),
///         ("order".to_string(), "week_number.asc.nullslast".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RestQuery {
    table: &'static str,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<u32>,
    on_conflict: Option<String>,
}

impl RestQuery {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            select: None,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            on_conflict: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn not_null(mut self, column: &str) -> Self {
        self.filters
            .push((column.to_string(), "not.is.null".to_string()));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order
            .push(format!("{}.{}", column, direction.as_str()));
        self
    }

    pub fn order_nulls(mut self, column: &str, direction: Direction, nulls: Nulls) -> Self {
        self.order.push(format!(
            "{}.{}.{}",
            column,
            direction.as_str(),
            nulls.as_str()
        ));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Declares the uniqueness constraint an upsert merges on.
    pub fn on_conflict(mut self, columns: &str) -> Self {
        self.on_conflict = Some(columns.to_string());
        self
    }

    pub fn table_name(&self) -> &'static str {
        self.table
    }

    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 4);

        if let Some(ref select) = self.select {
            params.push(("select".to_string(), select.clone()));
        }

        params.extend(self.filters.iter().cloned());

        if !self.order.is_empty() {
            params.push(("order".to_string(), self.order.join(",")));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        if let Some(ref columns) = self.on_conflict {
            params.push(("on_conflict".to_string(), columns.clone()));
        }

        params
    }
}
