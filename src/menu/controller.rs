use super::{FilterOutcome, MenuFilter, TagFilter, apply_filter};
use crate::client::{ApiClient, ClientError};
use crate::i18n::Locale;
use crate::models::{MenuCategory, MenuItem};

/// Identifies one fetch; only the most recent ticket may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
    Idle,
    Loading,
    Loaded(Vec<MenuItem>),
    Failed { message: String, retryable: bool },
}

/// What the menu page should display right now.
#[derive(Debug, PartialEq)]
pub enum MenuView<'a> {
    Loading,
    Failed { message: &'a str, retryable: bool },
    Ready(FilterOutcome<'a>),
}

/// Owns the fetched menu list and the filter inputs of one menu view.
pub struct MenuController {
    generation: u64,
    state: MenuState,
    filter: MenuFilter,
}

impl MenuController {
    pub fn new(filter: MenuFilter) -> Self {
        Self {
            generation: 0,
            state: MenuState::Idle,
            filter,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: MenuCategory) {
        self.filter.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        self.filter.tag = tag;
    }

    /// Starts a fetch, superseding any that is still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = MenuState::Loading;
        FetchTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` when the ticket was
    /// superseded or abandoned, in which case state is left untouched.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<MenuItem>, ClientError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "discarding stale menu response {} (current {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(items) => MenuState::Loaded(items),
            Err(e) => {
                log::warn!("menu fetch failed: {}", e);
                MenuState::Failed {
                    retryable: e.is_retryable(),
                    message: e.to_string(),
                }
            }
        };
        true
    }

    /// Invalidates every outstanding ticket, e.g. when the view goes away.
    pub fn abandon(&mut self) {
        self.generation += 1;
        if self.state == MenuState::Loading {
            self.state = MenuState::Idle;
        }
    }

    pub async fn refresh(&mut self, client: &ApiClient) -> bool {
        let ticket = self.begin_fetch();
        let result = client.list_menu(true).await;
        self.complete(ticket, result)
    }

    pub fn view(&self, locale: Locale) -> MenuView<'_> {
        match &self.state {
            MenuState::Idle | MenuState::Loading => MenuView::Loading,
            MenuState::Failed { message, retryable } => MenuView::Failed {
                message,
                retryable: *retryable,
            },
            MenuState::Loaded(items) => {
                MenuView::Ready(apply_filter(items, &self.filter, locale))
            }
        }
    }
}
