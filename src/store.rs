/// Remote table access: the `ToolStore` seam and the PostgREST query model
/// Filters and ordering are plain data; `SupabaseClient` renders them as query pairs

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::tool_data::{NewTool, Tool, ToolPatch};

pub const TOOLS_TABLE: &str = "tools";

/// CRUD access to the `tools` table
#[async_trait(?Send)]
pub trait ToolStore {
    async fn select(&self, query: &SelectQuery) -> Result<Vec<Tool>, RemoteError>;

    async fn insert(&self, rows: &[NewTool]) -> Result<(), RemoteError>;

    async fn update(&self, patch: &ToolPatch, filter: &Filter) -> Result<(), RemoteError>;
}

/// Row predicate understood by the remote table
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { column: String, value: String },
    /// Case-insensitive LIKE; `%` is the wildcard
    ILike { column: String, pattern: String },
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: &str, value: impl ToString) -> Filter {
        Filter::Eq {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// `column ILIKE '%text%'`
    pub fn contains(column: &str, text: &str) -> Filter {
        Filter::ILike {
            column: column.to_string(),
            pattern: format!("%{}%", text),
        }
    }

    /// Top-level query pair, e.g. `("id", "eq.42")`
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Filter::Eq { column, value } => (column.clone(), format!("eq.{}", value)),
            Filter::ILike { column, pattern } => (column.clone(), format!("ilike.{}", pattern)),
            Filter::Or(filters) => ("or".to_string(), or_list(filters)),
        }
    }

    /// Form used inside a logic tree, e.g. `name.ilike.%back%`
    fn to_tree_item(&self) -> String {
        match self {
            Filter::Eq { column, value } => format!("{}.eq.{}", column, quote_tree_value(value)),
            Filter::ILike { column, pattern } => {
                format!("{}.ilike.{}", column, quote_tree_value(pattern))
            }
            Filter::Or(filters) => format!("or{}", or_list(filters)),
        }
    }
}

fn or_list(filters: &[Filter]) -> String {
    let items: Vec<String> = filters.iter().map(Filter::to_tree_item).collect();
    format!("({})", items.join(","))
}

/// Quote values that would otherwise break the `or=(...)` syntax
fn quote_tree_value(value: &str) -> String {
    let reserved = |c: char| matches!(c, ',' | '.' | ':' | '(' | ')' | '"' | '\\') || c.is_whitespace();
    if !value.contains(reserved) {
        return value.to_string();
    }

    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn descending(column: &str) -> Order {
        Order {
            column: column.to_string(),
            ascending: false,
        }
    }
}

/// A `select` request against the tools table
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub columns: String,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
}

impl SelectQuery {
    /// All columns, all rows
    pub fn all() -> SelectQuery {
        SelectQuery {
            columns: "*".to_string(),
            filter: None,
            order: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> SelectQuery {
        self.filter = Some(filter);
        self
    }

    pub fn order(mut self, order: Order) -> SelectQuery {
        self.order = Some(order);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];

        if let Some(filter) = &self.filter {
            pairs.push(filter.to_query_pair());
        }

        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{}.{}", order.column, direction)));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_select_all_ordered() {
        let query = SelectQuery::all().order(Order::descending("times_opened"));

        assert_eq!(
            query.to_query_pairs(),
            vec![pair("select", "*"), pair("order", "times_opened.desc")]
        );
    }

    #[test]
    fn test_eq_filter() {
        assert_eq!(Filter::eq("id", 42).to_query_pair(), pair("id", "eq.42"));
    }

    #[test]
    fn test_contains_filter() {
        assert_eq!(
            Filter::contains("name", "back").to_query_pair(),
            pair("name", "ilike.%back%")
        );
    }

    #[test]
    fn test_or_of_contains() {
        let filter = Filter::Or(vec![
            Filter::contains("name", "back"),
            Filter::contains("description", "back"),
        ]);

        assert_eq!(
            filter.to_query_pair(),
            pair("or", "(name.ilike.%back%,description.ilike.%back%)")
        );
    }

    #[test]
    fn test_or_quotes_reserved_characters() {
        let filter = Filter::Or(vec![
            Filter::contains("name", "hero, sections"),
            Filter::contains("description", "say \"hi\""),
        ]);

        assert_eq!(
            filter.to_query_pair(),
            pair(
                "or",
                r#"(name.ilike."%hero, sections%",description.ilike."%say \"hi\"%")"#
            )
        );
    }

    #[test]
    fn test_full_search_query() {
        let query = SelectQuery::all()
            .filter(Filter::Or(vec![
                Filter::contains("name", "icons"),
                Filter::contains("description", "icons"),
            ]))
            .order(Order::descending("created_at"));

        assert_eq!(
            query.to_query_pairs(),
            vec![
                pair("select", "*"),
                pair("or", "(name.ilike.%icons%,description.ilike.%icons%)"),
                pair("order", "created_at.desc"),
            ]
        );
    }
}
