use crossterm::event::KeyCode;

use crate::models::Resource;
use crate::resources::view_config;
use crate::view::{FetchOutcome, FetchTicket, ResourceView};

/// Dashboard state: one mounted resource view at a time, chosen by tab.
pub struct DashboardApp {
    base_url: String,
    active: Resource,
    view: ResourceView,
    pub selected: usize,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(base_url: impl Into<String>, initial: Resource) -> Self {
        let base_url = base_url.into();
        let view = ResourceView::new(view_config(initial), initial.endpoint(&base_url));
        Self {
            base_url,
            active: initial,
            view,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn active(&self) -> Resource {
        self.active
    }

    pub fn view(&self) -> &ResourceView {
        &self.view
    }

    /// Mount the active view. The caller performs the request.
    pub fn start(&mut self) -> FetchTicket {
        self.view.mount()
    }

    /// Unmount the current tab and mount `resource` in its place. Returns
    /// `None` when `resource` is already showing.
    pub fn switch_to(&mut self, resource: Resource) -> Option<FetchTicket> {
        if resource == self.active {
            return None;
        }

        tracing::info!(from = %self.active, to = %resource, "switching resource");
        self.view.unmount();
        self.active = resource;
        self.selected = 0;
        self.view = ResourceView::new(view_config(resource), resource.endpoint(&self.base_url));
        Some(self.view.mount())
    }

    /// Returns whether the outcome changed the visible state.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let applied = self.view.commit(&outcome.ticket, outcome.result);
        if applied {
            self.clamp_selection();
        }
        applied
    }

    pub fn row_count(&self) -> usize {
        self.view.state().records().map(|r| r.len()).unwrap_or(0)
    }

    /// Handle one key press. A returned ticket must be fetched.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<FetchTicket> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.switch_to(self.active.next()),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.switch_to(self.active.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.switch_to(Resource::ALL[index])
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection_down();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection_up();
                None
            }
            _ => None,
        }
    }

    fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn move_selection_up(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = if self.selected == 0 { count - 1 } else { self.selected - 1 };
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.row_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}
