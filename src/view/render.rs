//! Pure projection of view state onto a paintable screen model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::articles::{ArticleListModel, EventFilter, SortOrder};
use crate::fetch::FetchState;
use crate::news::{Article, ArticleId, Category, MentionedStock};
use crate::sentiment::SentimentBar;
use crate::view::{ViewState, time};

/// Width of the plain-text sentiment bar.
const TEXT_BAR_WIDTH: usize = 20;

/// One option of a control, with whether it is the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice<T> {
    pub value: T,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub categories: Vec<Choice<Category>>,
    /// Derived from the unfiltered set; the effective filter is selected.
    pub event_types: Vec<Choice<EventFilter>>,
    pub sort_orders: Vec<Choice<SortOrder>>,
}

/// Outbound link to the original article, opened in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCard {
    pub id: ArticleId,
    /// `AAPL: $123.45`, or the bare ticker when the price is missing or zero.
    pub ticker_chip: String,
    pub timestamp: String,
    pub headline: String,
    pub event_badge: String,
    pub sentiment: SentimentBar,
    /// `None` when the article mentions no other stocks.
    pub mentioned_stocks: Option<Vec<String>>,
    pub trusted: bool,
    pub source: Option<String>,
    pub anomaly: bool,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Body {
    Loading,
    /// Replaces the whole grid.
    Failure { message: String },
    Grid(Vec<ArticleCard>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub controls: Controls,
    pub body: Body,
}

impl Screen {
    /// Cards currently shown; empty while loading or failed.
    pub fn cards(&self) -> &[ArticleCard] {
        match &self.body {
            Body::Grid(cards) => cards,
            Body::Loading | Body::Failure { .. } => &[],
        }
    }
}

/// Zero counts as no price.
fn price_chip(ticker: &str, price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 => format!("{ticker}: ${p:.2}"),
        _ => ticker.to_string(),
    }
}

fn stock_chips(stocks: &[MentionedStock]) -> Option<Vec<String>> {
    if stocks.is_empty() {
        return None;
    }
    Some(stocks.iter().map(|s| price_chip(&s.ticker, s.price)).collect())
}

/// Card for one article as of `now`.
pub fn article_card(article: &Article, anomaly: bool, now: DateTime<Utc>) -> ArticleCard {
    ArticleCard {
        id: article.id.clone(),
        ticker_chip: price_chip(&article.ticker, article.ticker_price),
        timestamp: time::relative_unix(article.datetime, now),
        headline: article.headline.clone(),
        event_badge: article.event_type.clone(),
        sentiment: SentimentBar::from_sentiment(&article.sentiment),
        mentioned_stocks: stock_chips(&article.mentioned_stocks),
        trusted: article.is_trusted_source,
        source: article.source.clone(),
        anomaly,
        link: Link {
            href: article.url.clone(),
            label: "Read Article",
            target: "_blank",
            rel: "noopener noreferrer",
        },
    }
}

fn controls(state: &ViewState, model: &ArticleListModel) -> Controls {
    let effective = model.effective_filter(&state.event);
    Controls {
        categories: Category::ALL
            .into_iter()
            .map(|c| Choice {
                value: c,
                selected: c == state.category,
            })
            .collect(),
        event_types: model
            .event_types()
            .iter()
            .map(|e| Choice {
                value: e.clone(),
                selected: *e == effective,
            })
            .collect(),
        sort_orders: SortOrder::ALL
            .into_iter()
            .map(|o| Choice {
                value: o,
                selected: o == state.sort,
            })
            .collect(),
    }
}

/// Composes the screen from read-only state.
pub fn render(
    state: &ViewState,
    fetch: &FetchState,
    model: &ArticleListModel,
    now: DateTime<Utc>,
) -> Screen {
    let body = match fetch {
        FetchState::Idle | FetchState::Loading { .. } => Body::Loading,
        FetchState::Failure { message, .. } => Body::Failure {
            message: message.clone(),
        },
        FetchState::Success { .. } => Body::Grid(
            model
                .view(&state.event, state.sort)
                .into_iter()
                .map(|a| article_card(a, model.is_anomaly(&a.id), now))
                .collect(),
        ),
    };

    Screen {
        controls: controls(state, model),
        body,
    }
}

fn write_choices<T: fmt::Display>(f: &mut fmt::Formatter<'_>, choices: &[Choice<T>]) -> fmt::Result {
    for (i, c) in choices.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        if c.selected {
            write!(f, "[{}]", c.value)?;
        } else {
            write!(f, " {} ", c.value)?;
        }
    }
    writeln!(f)
}

impl fmt::Display for ArticleCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  ({})", self.ticker_chip, self.timestamp)?;
        writeln!(f, "  {}", self.headline)?;
        write!(f, "  <{}>", self.event_badge)?;
        if self.anomaly {
            f.write_str(" !anomaly")?;
        }
        writeln!(f)?;
        writeln!(f, "  {} {}", self.sentiment.to_text(TEXT_BAR_WIDTH), self.sentiment)?;
        if let Some(stocks) = &self.mentioned_stocks {
            writeln!(f, "  Mentioned Stocks: {}", stocks.join(", "))?;
        }
        if self.trusted {
            f.write_str("  [Trusted]")?;
        }
        if let Some(source) = &self.source {
            write!(f, "  {source}")?;
        }
        writeln!(f, "  {}: {}", self.link.label, self.link.href)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_choices(f, &self.controls.categories)?;
        f.write_str("Event Type: ")?;
        write_choices(f, &self.controls.event_types)?;
        f.write_str("Sort: ")?;
        write_choices(f, &self.controls.sort_orders)?;
        writeln!(f)?;

        match &self.body {
            Body::Loading => writeln!(f, "Loading..."),
            Body::Failure { message } => writeln!(f, "{message}"),
            Body::Grid(cards) if cards.is_empty() => writeln!(f, "No articles."),
            Body::Grid(cards) => {
                for card in cards {
                    writeln!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}
