//! The fetch-normalize-render lifecycle shared by every resource screen.
//!
//! A [`ResourceView`] owns one endpoint and its [`ViewState`]. Mounting
//! issues a [`FetchTicket`]; whoever performs the request hands the result
//! back through [`ResourceView::commit`], which accepts it only while the
//! ticket is current and the view is still loading.

pub mod columns;
pub mod fetch;
pub mod state;
pub mod table;

pub use columns::{Accessor, Column, Formatter};
pub use fetch::{spawn_fetch, FetchOutcome, FetchTicket};
pub use state::ViewState;
pub use table::{render_table, Cell, Row, RowKey, Span, TableBody, TableModel, Tone, ViewModel};

use crate::client::ApiClient;
use crate::error::FetchError;
use crate::models::{Endpoint, RawResponse, Resource};

/// Everything that distinguishes one resource screen from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub resource: Resource,
    pub icon: &'static str,
    /// "Loading <noun>..."
    pub loading_noun: &'static str,
    /// "No <noun> found."
    pub empty_noun: &'static str,
    /// "<count> <noun>"
    pub badge_noun: &'static str,
    pub columns: Vec<Column>,
}

impl ViewConfig {
    pub fn title(&self) -> &'static str {
        self.resource.title()
    }

    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title())
    }
}

#[derive(Debug)]
pub struct ResourceView {
    config: ViewConfig,
    endpoint: Endpoint,
    state: ViewState,
    current: Option<u64>,
}

impl ResourceView {
    pub fn new(config: ViewConfig, endpoint: Endpoint) -> Self {
        Self {
            config,
            endpoint,
            state: ViewState::Loading,
            current: None,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    /// Enter Loading and start a new fetch cycle. Any earlier ticket goes
    /// stale.
    pub fn mount(&mut self) -> FetchTicket {
        let ticket = FetchTicket::issue(self.endpoint.clone());
        self.current = Some(ticket.cycle());
        self.state = ViewState::Loading;
        tracing::debug!(endpoint = %self.endpoint, cycle = ticket.cycle(), "view mounted");
        ticket
    }

    /// Re-mount only when the endpoint actually changes.
    pub fn set_endpoint(&mut self, endpoint: Endpoint) -> Option<FetchTicket> {
        if endpoint == self.endpoint && self.is_mounted() {
            return None;
        }
        self.endpoint = endpoint;
        Some(self.mount())
    }

    /// Drop the records and stop accepting results for the current cycle.
    pub fn unmount(&mut self) {
        self.current = None;
        self.state = ViewState::Loading;
    }

    /// Apply a finished fetch. Returns whether the state changed; results
    /// for superseded tickets, or a second result for the same cycle, are
    /// ignored.
    pub fn commit(&mut self, ticket: &FetchTicket, result: Result<RawResponse, FetchError>) -> bool {
        let is_current = self.current == Some(ticket.cycle()) && *ticket.endpoint() == self.endpoint;
        if !is_current {
            tracing::warn!(
                endpoint = %ticket.endpoint(),
                cycle = ticket.cycle(),
                "discarding superseded fetch result"
            );
            return false;
        }
        if !self.state.is_loading() {
            tracing::warn!(
                cycle = ticket.cycle(),
                state = self.state.label(),
                "fetch cycle already settled"
            );
            return false;
        }

        self.state = ViewState::from_result(result);
        match &self.state {
            ViewState::Ready(records) => {
                tracing::info!(endpoint = %self.endpoint, count = records.len(), "view ready")
            }
            ViewState::Error(message) => {
                tracing::error!(endpoint = %self.endpoint, %message, "view failed")
            }
            ViewState::Loading => {}
        }
        true
    }

    /// One complete cycle: mount, fetch, commit.
    pub async fn load(&mut self, client: &ApiClient) -> &ViewState {
        let ticket = self.mount();
        let result = client.fetch_collection(ticket.endpoint()).await;
        self.commit(&ticket, result);
        &self.state
    }

    pub fn render(&self) -> ViewModel {
        match &self.state {
            ViewState::Loading => ViewModel::Loading(format!("Loading {}...", self.config.loading_noun)),
            ViewState::Error(message) => ViewModel::Error(message.clone()),
            ViewState::Ready(records) => ViewModel::Table(render_table(records, &self.config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::view_config;
    use serde_json::json;

    fn users_view() -> ResourceView {
        ResourceView::new(view_config(Resource::Users), Resource::Users.endpoint("http://api.test"))
    }

    fn ok(value: serde_json::Value) -> Result<RawResponse, FetchError> {
        Ok(RawResponse::from_value(value))
    }

    #[test]
    fn test_mount_enters_loading() {
        let mut view = users_view();
        let ticket = view.mount();
        assert!(view.state().is_loading());
        assert_eq!(ticket.endpoint(), view.endpoint());
        assert_eq!(view.render(), ViewModel::Loading("Loading users...".to_string()));
    }

    #[test]
    fn test_commit_settles_exactly_once() {
        let mut view = users_view();
        let ticket = view.mount();

        assert!(view.commit(&ticket, ok(json!([{"id": 1}]))));
        assert_eq!(view.state().records().map(|r| r.len()), Some(1));

        assert!(!view.commit(&ticket, Err(FetchError::Http(500))));
        assert_eq!(view.state().label(), "ready");
    }

    #[test]
    fn test_error_is_terminal() {
        let mut view = users_view();
        let ticket = view.mount();
        assert!(view.commit(&ticket, Err(FetchError::Http(500))));
        assert!(!view.commit(&ticket, ok(json!([]))));
        assert_eq!(view.render(), ViewModel::Error("HTTP error! status: 500".to_string()));
    }

    #[test]
    fn test_stale_result_after_endpoint_change_is_ignored() {
        let mut view = users_view();
        let first = view.mount();

        let second = view
            .set_endpoint(Endpoint::new("http://other.test/users/"))
            .expect("endpoint changed");

        assert!(!view.commit(&first, ok(json!([{"id": "stale"}]))));
        assert!(view.state().is_loading());

        assert!(view.commit(&second, ok(json!({"results": []}))));
        assert_eq!(view.state().records().map(|r| r.len()), Some(0));

        // still ignored once the new cycle has settled
        assert!(!view.commit(&first, Err(FetchError::Decode)));
        assert_eq!(view.state().label(), "ready");
    }

    #[test]
    fn test_same_endpoint_does_not_refetch() {
        let mut view = users_view();
        view.mount();
        let same = view.endpoint().clone();
        assert!(view.set_endpoint(same).is_none());
    }

    #[test]
    fn test_unmount_discards_in_flight_result() {
        let mut view = users_view();
        let ticket = view.mount();
        view.unmount();

        assert!(!view.is_mounted());
        assert!(!view.commit(&ticket, ok(json!([{"id": 1}]))));
        assert!(view.state().is_loading());
    }

    #[test]
    fn test_remount_starts_fresh_cycle() {
        let mut view = users_view();
        let first = view.mount();
        view.commit(&first, Err(FetchError::Network("refused".into())));

        let second = view.mount();
        assert_ne!(first.cycle(), second.cycle());
        assert!(view.state().is_loading());
        assert!(view.commit(&second, ok(json!([]))));
    }

    #[test]
    fn test_tickets_from_distinct_views_never_collide() {
        let mut a = users_view();
        let mut b = users_view();
        let ticket_a = a.mount();
        let _ticket_b = b.mount();

        assert!(!b.commit(&ticket_a, ok(json!([]))));
        assert!(b.state().is_loading());
    }
}
