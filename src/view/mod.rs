//! Top-level controller: interaction state, fetch wiring, and rendering.

mod render;
mod time;

pub use render::{ArticleCard, Body, Choice, Controls, Link, Screen, article_card, render};
pub use time::{from_unix, relative_time, relative_unix};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::{self, JoinError, JoinSet};

use crate::anomaly::DEFAULT_DEVIATION_THRESHOLD;
use crate::articles::{ArticleListModel, EventFilter, SortOrder};
use crate::core::{ArticleSource, DashError};
use crate::fetch::{FetchCompletion, FetchController, FetchState, FetchTicket, Resolution};
use crate::news::{Article, Category};

/// The three user selections, as plain serializable data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub category: Category,
    pub event: EventFilter,
    pub sort: SortOrder,
}

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Selections to start from.
    pub initial: ViewState,
    /// Outlier band half-width, in standard deviations.
    pub anomaly_threshold: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial: ViewState::default(),
            anomaly_threshold: DEFAULT_DEVIATION_THRESHOLD,
        }
    }
}

/// What [`ViewController::apply`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Articles installed for this ticket's category.
    Loaded(FetchTicket),
    /// The failure is now shown; the grid is empty.
    Failed(FetchTicket),
    /// The completion belonged to a superseded request and was dropped.
    Discarded(FetchTicket),
}

/// Owns the view state, the fetch lifecycle and the article set.
///
/// Category changes spawn a fetch task on the current Tokio runtime; its
/// completion is joined and applied with [`next_completion`](Self::next_completion).
/// Event and sort changes only recompute locally. Dropping the controller
/// aborts every outstanding fetch.
pub struct ViewController<S> {
    source: Arc<S>,
    state: ViewState,
    fetch: FetchController,
    model: ArticleListModel,
    tasks: JoinSet<FetchCompletion>,
    tickets: HashMap<task::Id, FetchTicket>,
}

impl<S: ArticleSource + 'static> ViewController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, ViewConfig::default())
    }

    pub fn with_config(source: Arc<S>, config: ViewConfig) -> Self {
        Self {
            source,
            state: config.initial,
            fetch: FetchController::new(),
            model: ArticleListModel::new(config.anomaly_threshold),
            tasks: JoinSet::new(),
            tickets: HashMap::new(),
        }
    }

    /// Initial load of the configured category.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(&mut self) -> FetchTicket {
        self.select_category(self.state.category)
    }

    /// Switches category and fetches it, even if it is already selected.
    ///
    /// Any outstanding fetch is superseded. Must be called from within a Tokio runtime.
    pub fn select_category(&mut self, category: Category) -> FetchTicket {
        self.state.category = category;
        let ticket = self.fetch.begin(category);

        let source = Arc::clone(&self.source);
        let handle = self.tasks.spawn(async move {
            let result = source.fetch_category(ticket.category).await;
            FetchCompletion { ticket, result }
        });
        self.tickets.insert(handle.id(), ticket);

        ticket
    }

    /// Selects an event type offered by the current article set.
    ///
    /// Returns `false` and keeps the current selection when `event` is not
    /// on offer; `All` is always accepted.
    pub fn select_event(&mut self, event: EventFilter) -> bool {
        if !self.model.event_types().contains(&event) {
            return false;
        }
        self.state.event = event;
        true
    }

    pub fn select_sort(&mut self, sort: SortOrder) {
        self.state.sort = sort;
    }

    /// Waits for the next fetch to finish and applies it.
    ///
    /// A fetch task that panicked or was cancelled completes as a failure of
    /// its ticket. Returns `None` when no fetch is outstanding.
    pub async fn next_completion(&mut self) -> Option<Applied> {
        loop {
            let completion = match self.tasks.join_next_with_id().await? {
                Ok((id, completion)) => {
                    self.tickets.remove(&id);
                    completion
                }
                Err(err) => match self.tickets.remove(&err.id()) {
                    Some(ticket) => FetchCompletion {
                        ticket,
                        result: Err(task_failure(&err)),
                    },
                    None => continue,
                },
            };
            return Some(self.apply(completion));
        }
    }

    /// Waits until every outstanding fetch has finished, applying each one.
    pub async fn settle(&mut self) -> Vec<Applied> {
        let mut applied = Vec::new();
        while let Some(a) = self.next_completion().await {
            applied.push(a);
        }
        applied
    }

    /// Applies a completion; stale ones leave everything untouched.
    ///
    /// Outstanding fetch tasks are unaffected; their own completions still
    /// arrive through [`next_completion`](Self::next_completion).
    pub fn apply(&mut self, completion: FetchCompletion) -> Applied {
        let ticket = completion.ticket;

        match self.fetch.resolve(completion) {
            Resolution::Loaded(articles) => {
                self.model.replace(articles);
                if !self.model.event_types().contains(&self.state.event) {
                    self.state.event = EventFilter::All;
                }
                Applied::Loaded(ticket)
            }
            Resolution::Failed(_) => {
                self.model.clear();
                Applied::Failed(ticket)
            }
            Resolution::Stale(_) => Applied::Discarded(ticket),
        }
    }
}

fn task_failure(err: &JoinError) -> DashError {
    let reason = if err.is_cancelled() { "cancelled" } else { "panicked" };
    DashError::Task(format!("fetch task {reason}"))
}

impl<S> ViewController<S> {
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn fetch_state(&self) -> &FetchState {
        self.fetch.state()
    }

    pub const fn model(&self) -> &ArticleListModel {
        &self.model
    }

    /// Number of spawned fetches not yet joined.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Articles the grid shows right now, in display order.
    pub fn visible(&self) -> Vec<&Article> {
        match self.fetch.state() {
            FetchState::Success { .. } => self.model.view(&self.state.event, self.state.sort),
            _ => Vec::new(),
        }
    }

    /// Renders the screen as of `now`.
    pub fn render_at(&self, now: DateTime<Utc>) -> Screen {
        render(&self.state, self.fetch.state(), &self.model, now)
    }

    pub fn render(&self) -> Screen {
        self.render_at(Utc::now())
    }
}
