use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::sentiment::Sentiment;

/// The editorial groupings the news API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Tech,
    Automobile,
    #[serde(rename = "Oil & Gas")]
    OilAndGas,
    Finance,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Tech, Self::Automobile, Self::OilAndGas, Self::Finance];

    /// The name the API and the category tabs use.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::Automobile => "Automobile",
            Self::OilAndGas => "Oil & Gas",
            Self::Finance => "Finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Stable article key; upstream ids may be numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for ArticleId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// Another instrument named in an article's headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentionedStock {
    pub ticker: String,
    /// Last price, when the backend could quote it.
    pub price: Option<f64>,
}

/// A single news article with its sentiment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: ArticleId,
    pub headline: String,
    /// The primary instrument the article was fetched for.
    pub ticker: String,
    pub ticker_price: Option<f64>,
    /// Other instruments mentioned in the headline; possibly empty.
    pub mentioned_stocks: Vec<MentionedStock>,
    /// Classifier label from the upstream pipeline (e.g. "Earnings Report").
    pub event_type: String,
    pub sentiment: Sentiment,
    pub is_trusted_source: bool,
    pub url: String,
    /// Publication time, Unix seconds.
    pub datetime: i64,
    /// Publisher name (e.g. "Reuters").
    pub source: Option<String>,
    pub summary: Option<String>,
    /// `positive - negative` as computed upstream.
    pub polarity_score: Option<f64>,
    /// Upstream outlier flag; `None` when the backend did not compute one.
    pub is_anomaly: Option<bool>,
}
