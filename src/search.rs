/// Search across names, notes and tags

use crate::error::RemoteError;
use crate::operations::filter_tools;
use crate::store::{Filter, Order, SelectQuery, ToolStore};
use crate::tool_data::Tool;

/// Remote half of a search: substring match on name/description, newest first
pub fn search_query(query: &str) -> SelectQuery {
    let select = SelectQuery::all().order(Order::descending("created_at"));

    if query.is_empty() {
        select
    } else {
        select.filter(Filter::Or(vec![
            Filter::contains("name", query),
            Filter::contains("description", query),
        ]))
    }
}

/// Find tools whose name, note or any tag contains `query`, ignoring case
///
/// The remote table narrows the rows by name and description; the result is
/// then re-checked locally so that tags take part and every field gets the
/// same plain-substring semantics. A remote failure is returned as-is
/// without running the local pass.
pub async fn search<S: ToolStore>(store: &S, query: &str) -> Result<Vec<Tool>, RemoteError> {
    let fetched = store.select(&search_query(query)).await?;
    Ok(filter_tools(fetched, query))
}

/// Everything, most opened first (browse page)
pub async fn fetch_popular<S: ToolStore>(store: &S) -> Result<Vec<Tool>, RemoteError> {
    store
        .select(&SelectQuery::all().order(Order::descending("times_opened")))
        .await
}

#[cfg(test)]
pub(crate) mod test_store {
    //! In-memory `ToolStore` that records every call
    //!
    //! `select` hands back every row regardless of the filter; tests assert
    //! on the recorded query instead.

    use std::cell::RefCell;

    use async_trait::async_trait;

    use crate::error::RemoteError;
    use crate::store::{Filter, SelectQuery, ToolStore};
    use crate::tool_data::{NewTool, Tool, ToolPatch};

    #[derive(Default)]
    pub struct RecordingStore {
        pub rows: Vec<Tool>,
        pub fail_with: Option<RemoteError>,
        pub selects: RefCell<Vec<SelectQuery>>,
        pub inserts: RefCell<Vec<Vec<NewTool>>>,
        pub updates: RefCell<Vec<(ToolPatch, Filter)>>,
    }

    impl RecordingStore {
        pub fn with_rows(rows: Vec<Tool>) -> RecordingStore {
            RecordingStore {
                rows,
                ..RecordingStore::default()
            }
        }

        pub fn failing(error: RemoteError) -> RecordingStore {
            RecordingStore {
                fail_with: Some(error),
                ..RecordingStore::default()
            }
        }

        fn outcome(&self) -> Result<(), RemoteError> {
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ToolStore for RecordingStore {
        async fn select(&self, query: &SelectQuery) -> Result<Vec<Tool>, RemoteError> {
            self.selects.borrow_mut().push(query.clone());
            self.outcome()?;

            Ok(self.rows.clone())
        }

        async fn insert(&self, rows: &[NewTool]) -> Result<(), RemoteError> {
            self.inserts.borrow_mut().push(rows.to_vec());
            self.outcome()
        }

        async fn update(&self, patch: &ToolPatch, filter: &Filter) -> Result<(), RemoteError> {
            self.updates.borrow_mut().push((patch.clone(), filter.clone()));
            self.outcome()
        }
    }
}
