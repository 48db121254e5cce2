//! Request lifecycle for "load the articles of category C".
//!
//! Every fetch is tagged with a monotonically increasing [`RequestToken`]. A
//! completion is applied only if it carries the latest token; anything older
//! belongs to a superseded selection and is dropped on arrival.

use serde::Serialize;

use crate::core::DashError;
use crate::news::{Article, Category};

/// Identity of one issued fetch; later fetches always compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A fetch in flight: which request, for which category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub category: Category,
}

/// The result of a fetch, delivered back to whoever issued it.
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: Result<Vec<Article>, DashError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading {
        category: Category,
    },
    Success {
        category: Category,
        count: usize,
    },
    Failure {
        category: Category,
        message: String,
    },
}

impl FetchState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// What became of a completion handed to [`FetchController::resolve`].
#[derive(Debug)]
pub enum Resolution {
    /// Current request succeeded; the caller should install these articles.
    Loaded(Vec<Article>),
    /// Current request failed; the state now carries the message.
    Failed(DashError),
    /// A superseded request; nothing changed.
    Stale(FetchTicket),
}

#[derive(Debug, Default)]
pub struct FetchController {
    issued: u64,
    current: Option<FetchTicket>,
    state: FetchState,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request for `category`, superseding any outstanding one.
    ///
    /// Clears a previous failure immediately.
    pub fn begin(&mut self, category: Category) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket {
            token: RequestToken(self.issued),
            category,
        };
        self.current = Some(ticket);
        self.state = FetchState::Loading { category };

        #[cfg(feature = "tracing")]
        tracing::debug!(token = ticket.token.get(), %category, "fetch started");

        ticket
    }

    /// Whether `ticket` is the most recently issued request.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    pub fn current(&self) -> Option<FetchTicket> {
        self.current
    }

    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Applies a completion if it belongs to the current request.
    pub fn resolve(&mut self, completion: FetchCompletion) -> Resolution {
        let FetchCompletion { ticket, result } = completion;

        if !self.is_current(&ticket) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                token = ticket.token.get(),
                category = %ticket.category,
                "discarding stale response"
            );
            return Resolution::Stale(ticket);
        }

        match result {
            Ok(articles) => {
                self.state = FetchState::Success {
                    category: ticket.category,
                    count: articles.len(),
                };
                Resolution::Loaded(articles)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(category = %ticket.category, error = %err, "fetch failed");

                self.state = FetchState::Failure {
                    category: ticket.category,
                    message: err.to_string(),
                };
                Resolution::Failed(err)
            }
        }
    }
}
