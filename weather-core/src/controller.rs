use std::sync::Arc;

use crate::{
    error::LookupError,
    model::WeatherResult,
    provider::WeatherProvider,
    state::{Ticket, ViewState},
};

/// Owns the view state and issues lookups against a provider.
#[derive(Debug)]
pub struct Controller {
    provider: Arc<dyn WeatherProvider>,
    state: ViewState,
}

impl Controller {
    pub fn new(provider: Arc<dyn WeatherProvider>, state: ViewState) -> Self {
        Self { provider, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn provider(&self) -> Arc<dyn WeatherProvider> {
        Arc::clone(&self.provider)
    }

    /// Look up `query` and wait for the outcome.
    pub async fn submit(&mut self, query: &str) {
        let ticket = self.begin(query);
        let outcome = self.provider.current_weather(ticket.query()).await;
        self.finish(&ticket, outcome);
    }

    /// First half of [`Controller::submit`]: record the query and mark loading.
    pub fn begin(&mut self, query: &str) -> Ticket {
        let (state, ticket) = self.take_state().with_query(query).submit();
        self.state = state;
        ticket
    }

    /// Second half of [`Controller::submit`]. Returns false if a newer lookup
    /// has been started since `ticket` was issued, or `ticket` was already
    /// finished.
    pub fn finish(&mut self, ticket: &Ticket, outcome: Result<WeatherResult, LookupError>) -> bool {
        let applied = self.state.is_current(ticket);
        self.state = self.take_state().resolve(ticket, outcome);
        applied
    }

    pub fn toggle_theme(&mut self) {
        self.state = self.take_state().toggle_theme();
    }

    pub fn toggle_locale(&mut self) {
        self.state = self.take_state().toggle_locale();
    }

    fn take_state(&mut self) -> ViewState {
        std::mem::take(&mut self.state)
    }
}
