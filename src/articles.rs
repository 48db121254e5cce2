//! The fetched article set of the active category and its derived views.
//!
//! The unfiltered set is the single source of truth: the event-type list, the
//! filtered subset and the sorted order are all recomputed from it on demand
//! and never patched incrementally.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::anomaly::{DEFAULT_DEVIATION_THRESHOLD, flag_anomalies};
use crate::news::{Article, ArticleId};

/// Label of the pass-through event filter.
pub const ALL_EVENTS: &str = "All";

/// Event-type selection: everything, or a single upstream label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventFilter {
    #[default]
    All,
    Only(String),
}

impl EventFilter {
    pub fn only(event_type: impl Into<String>) -> Self {
        Self::from(event_type.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_EVENTS,
            Self::Only(e) => e,
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(e) => article.event_type == *e,
        }
    }
}

impl From<String> for EventFilter {
    fn from(s: String) -> Self {
        if s == ALL_EVENTS { Self::All } else { Self::Only(s) }
    }
}

impl From<EventFilter> for String {
    fn from(f: EventFilter) -> Self {
        match f {
            EventFilter::All => ALL_EVENTS.to_string(),
            EventFilter::Only(e) => e,
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutually exclusive orderings of the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Trusted sources first; otherwise server order.
    #[default]
    Relevant,
    /// Most recent `datetime` first.
    Newest,
}

impl SortOrder {
    pub const ALL: [Self; 2] = [Self::Relevant, Self::Newest];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevant => "Relevant",
            Self::Newest => "Newest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `All` followed by each distinct event type, in order of first appearance.
pub fn event_types(articles: &[Article]) -> Vec<EventFilter> {
    let mut seen = HashSet::new();
    std::iter::once(EventFilter::All)
        .chain(
            articles
                .iter()
                .filter(|&a| seen.insert(a.event_type.as_str()))
                .map(|a| EventFilter::Only(a.event_type.clone())),
        )
        .collect()
}

/// Order-preserving subset matching `filter`.
pub fn filter_by_event<'a>(articles: &'a [Article], filter: &EventFilter) -> Vec<&'a Article> {
    articles.iter().filter(|a| filter.matches(a)).collect()
}

/// Stable sort; equal keys keep their relative order.
pub fn sort_articles(articles: &mut [&Article], order: SortOrder) {
    match order {
        // trust is the only key
        SortOrder::Relevant => {
            articles.sort_by(|a, b| b.is_trusted_source.cmp(&a.is_trusted_source));
        }
        SortOrder::Newest => articles.sort_by(|a, b| b.datetime.cmp(&a.datetime)),
    }
}

/// Filter, then sort, starting from the full set.
pub fn derive_view<'a>(
    articles: &'a [Article],
    filter: &EventFilter,
    order: SortOrder,
) -> Vec<&'a Article> {
    let mut view = filter_by_event(articles, filter);
    sort_articles(&mut view, order);
    view
}

/// Holds the article set of the active category.
#[derive(Debug, Clone)]
pub struct ArticleListModel {
    articles: Vec<Article>,
    event_types: Vec<EventFilter>,
    anomalies: HashSet<ArticleId>,
    anomaly_threshold: f64,
}

impl Default for ArticleListModel {
    fn default() -> Self {
        Self::new(DEFAULT_DEVIATION_THRESHOLD)
    }
}

impl ArticleListModel {
    pub fn new(anomaly_threshold: f64) -> Self {
        Self {
            articles: Vec::new(),
            event_types: vec![EventFilter::All],
            anomalies: HashSet::new(),
            anomaly_threshold,
        }
    }

    /// Replaces the whole set and rebuilds everything derived from it.
    pub fn replace(&mut self, articles: Vec<Article>) {
        self.event_types = event_types(&articles);
        self.anomalies = articles
            .iter()
            .zip(flag_anomalies(&articles, self.anomaly_threshold))
            .filter_map(|(a, flagged)| flagged.then(|| a.id.clone()))
            .collect();
        self.articles = articles;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Selectable event types, derived from the unfiltered set.
    pub fn event_types(&self) -> &[EventFilter] {
        &self.event_types
    }

    /// `selected` if the current set offers it, otherwise `All`.
    ///
    /// A stale selection (one carried over from a previous set, or restored
    /// from a saved [`ViewState`](crate::ViewState)) shows the whole set.
    pub fn effective_filter(&self, selected: &EventFilter) -> EventFilter {
        if self.event_types.contains(selected) {
            selected.clone()
        } else {
            EventFilter::All
        }
    }

    /// The visible list for a selection.
    pub fn view(&self, selected: &EventFilter, order: SortOrder) -> Vec<&Article> {
        derive_view(&self.articles, &self.effective_filter(selected), order)
    }

    pub fn is_anomaly(&self, id: &ArticleId) -> bool {
        self.anomalies.contains(id)
    }
}
