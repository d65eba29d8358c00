/// Per-view list state: the fetched tools, requests in flight and last error

use std::rc::Rc;

use yew::functional::Reducible;

use crate::error::RemoteError;
use crate::tool_data::Tool;

/// Owned by one view through `use_reducer`
///
/// Every action is applied to the state current at dispatch time, so a
/// response that lands late never restores an older snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub tools: Vec<Tool>,
    pub in_flight: usize,
    pub error: Option<String>,
}

pub enum ListAction {
    /// A fetch was started
    Begin,
    /// A fetch settled
    Finish(Result<Vec<Tool>, RemoteError>),
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: ListAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Begin => {
                next.in_flight += 1;
                next.error = None;
            }
            ListAction::Finish(Ok(tools)) => {
                next.in_flight = next.in_flight.saturating_sub(1);
                next.tools = tools;
                next.error = None;
            }
            // Tools on screen stay; only the error is recorded
            ListAction::Finish(Err(e)) => {
                log::error!("Fetching tools failed: {}", e);
                next.in_flight = next.in_flight.saturating_sub(1);
                next.error = Some(e.to_string());
            }
        }
        Rc::new(next)
    }
}

impl ListState {
    /// True while any fetch is still outstanding
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_test_tool(n: u128, name: &str) -> Tool {
        Tool {
            id: Uuid::from_u128(n),
            url: format!("https://{}.example", n),
            name: name.to_string(),
            description: None,
            tags: vec!["Icons".to_string()],
            favicon_url: None,
            saved_by: "Mia".to_string(),
            times_opened: 0,
            created_at: None,
        }
    }

    fn apply(state: Rc<ListState>, actions: Vec<ListAction>) -> Rc<ListState> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    fn offline() -> ListAction {
        ListAction::Finish(Err(RemoteError::Transport("offline".to_string())))
    }

    #[test]
    fn test_begin_keeps_tools() {
        let state = apply(
            Rc::new(ListState::default()),
            vec![ListAction::Begin, ListAction::Finish(Ok(vec![create_test_tool(1, "Lucide")]))],
        );

        let next = state.reduce(ListAction::Begin);

        assert!(next.loading());
        assert_eq!(next.tools.len(), 1);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_finish_replaces_tools() {
        let state = apply(
            Rc::new(ListState::default()),
            vec![
                ListAction::Begin,
                ListAction::Finish(Ok(vec![create_test_tool(1, "Lucide")])),
                ListAction::Begin,
                ListAction::Finish(Ok(vec![create_test_tool(2, "Coolors")])),
            ],
        );

        assert!(!state.loading());
        assert_eq!(state.tools.len(), 1);
        assert_eq!(state.tools[0].name, "Coolors");
    }

    #[test]
    fn test_failed_fetch_keeps_stale_tools() {
        let state = apply(
            Rc::new(ListState::default()),
            vec![ListAction::Begin, ListAction::Finish(Ok(vec![create_test_tool(1, "Lucide")]))],
        );

        let next = apply(state.clone(), vec![ListAction::Begin, offline()]);

        assert!(!next.loading());
        assert_eq!(next.tools, state.tools);
        assert_eq!(next.error, Some("network error: offline".to_string()));
    }

    #[test]
    fn test_late_failure_keeps_newer_results() {
        // "a" and "ab" both start; "a" lands, then "ab" fails
        let state = apply(
            Rc::new(ListState::default()),
            vec![
                ListAction::Begin,
                ListAction::Begin,
                ListAction::Finish(Ok(vec![create_test_tool(1, "Lucide"), create_test_tool(2, "Linear")])),
                offline(),
            ],
        );

        assert_eq!(state.tools.len(), 2);
        assert_eq!(state.tools[0].name, "Lucide");
        assert_eq!(state.error, Some("network error: offline".to_string()));
        assert!(!state.loading());
    }

    #[test]
    fn test_spinner_stays_while_another_fetch_is_pending() {
        let state = apply(
            Rc::new(ListState::default()),
            vec![
                ListAction::Begin,
                ListAction::Begin,
                ListAction::Finish(Ok(vec![create_test_tool(1, "Lucide")])),
            ],
        );

        assert!(state.loading());
        assert_eq!(state.tools.len(), 1);

        let settled = state.reduce(ListAction::Finish(Ok(vec![create_test_tool(2, "Coolors")])));

        assert!(!settled.loading());
        assert_eq!(settled.tools[0].name, "Coolors");
    }
}
