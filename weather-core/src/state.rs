//! Widget view state and its transitions.
//!
//! Every transition takes the state by value and returns the next one, so
//! the front end never mutates shared UI state behind the controller's back.

use tracing::{debug, warn};

use crate::{
    error::LookupError,
    i18n::{self, Locale},
    model::WeatherResult,
};

/// Handle for one submitted lookup.
///
/// Only the ticket with the latest sequence number may resolve the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    query: String,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub loading: bool,
    pub result: Option<WeatherResult>,
    pub error: Option<String>,
    pub dark_mode: bool,
    pub locale: Locale,
    issued: u64,
}

impl ViewState {
    pub fn new(locale: Locale, dark_mode: bool) -> Self {
        Self {
            locale,
            dark_mode,
            ..Self::default()
        }
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Start a lookup for the current query.
    pub fn submit(self) -> (Self, Ticket) {
        let seq = self.issued + 1;
        let ticket = Ticket {
            seq,
            query: self.query.clone(),
        };
        let next = Self {
            loading: true,
            error: None,
            issued: seq,
            ..self
        };
        (next, ticket)
    }

    /// Whether `ticket` belongs to the most recent submission and has not
    /// been resolved yet.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.loading && ticket.seq == self.issued
    }

    /// Apply the outcome of a lookup. Outcomes of superseded or already
    /// resolved tickets are dropped.
    pub fn resolve(self, ticket: &Ticket, outcome: Result<WeatherResult, LookupError>) -> Self {
        if !self.is_current(ticket) {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                query = %ticket.query,
                loading = self.loading,
                "discarding stale lookup"
            );
            return self;
        }

        match outcome {
            Ok(result) => Self {
                loading: false,
                result: Some(result),
                error: None,
                ..self
            },
            Err(err) => {
                warn!(query = %ticket.query, not_found = err.is_not_found(), "lookup failed: {err}");
                let message = i18n::translate(self.locale, i18n::FAILED_TO_FIND_CITY).to_string();
                Self {
                    loading: false,
                    result: None,
                    error: Some(message),
                    ..self
                }
            }
        }
    }

    pub fn toggle_theme(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    pub fn toggle_locale(self) -> Self {
        Self {
            locale: self.locale.toggled(),
            ..self
        }
    }

    /// Translate `key` with the active locale.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.locale, key)
    }
}
