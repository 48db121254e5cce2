use std::collections::HashSet;

use url::Url;

use crate::{
    core::{DashClient, DashError, net},
    news::{
        model::{Article, ArticleId, Category, MentionedStock},
        wire::{RawArticle, RawId, RawMentionedStock},
    },
    sentiment::Sentiment,
};

/// Label the backend assigns when no event keyword matched.
pub(crate) const GENERAL_NEWS: &str = "General News";

/// `{base}/{category}`, with the category percent-encoded as a single path segment.
pub(crate) fn category_url(base: &Url, category: Category) -> Result<Url, DashError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| DashError::InvalidBase(base.to_string()))?
        .pop_if_empty()
        .push(category.as_str());
    Ok(url)
}

pub(super) async fn fetch_category(
    client: &DashClient,
    category: Category,
) -> Result<Vec<Article>, DashError> {
    let url = category_url(client.base_news(), category)?;

    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;

    decode_articles(&body)
}

/// Decode a category response body into articles.
///
/// Duplicate ids keep their first occurrence. Negative or non-finite sentiment
/// weights are clamped to zero.
///
/// # Errors
///
/// Returns [`DashError::Json`] if the body is not a JSON array of articles.
pub fn decode_articles(body: &str) -> Result<Vec<Article>, DashError> {
    let raw: Vec<RawArticle> = serde_json::from_str(body)?;

    let mut seen = HashSet::with_capacity(raw.len());
    let articles = raw
        .into_iter()
        .map(into_article)
        .filter(|a| {
            let fresh = seen.insert(a.id.clone());
            #[cfg(feature = "tracing")]
            {
                if !fresh {
                    tracing::debug!(id = %a.id, "dropping duplicate article");
                }
            }
            fresh
        })
        .collect();

    Ok(articles)
}

fn into_article(raw: RawArticle) -> Article {
    let sentiment = raw.sentiment.map_or_else(Sentiment::default, |s| {
        Sentiment::new(
            s.positive.unwrap_or_default(),
            s.neutral.unwrap_or_default(),
            s.negative.unwrap_or_default(),
        )
    });

    Article {
        id: match raw.id {
            RawId::Int(n) => ArticleId::from(n),
            RawId::Text(s) => ArticleId(s),
            RawId::Float(f) => ArticleId(f.to_string()),
        },
        headline: raw.headline.unwrap_or_default(),
        ticker: raw.ticker.unwrap_or_default(),
        ticker_price: raw.ticker_price,
        mentioned_stocks: raw
            .mentioned_stocks
            .unwrap_or_default()
            .into_iter()
            .map(|RawMentionedStock { ticker, price }| MentionedStock { ticker, price })
            .collect(),
        event_type: raw
            .event_type
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| GENERAL_NEWS.to_string()),
        sentiment,
        is_trusted_source: raw.is_trusted_source.unwrap_or(false),
        url: raw.url.unwrap_or_default(),
        datetime: raw.datetime,
        source: raw.source,
        summary: raw.summary,
        polarity_score: raw.polarity_score,
        is_anomaly: raw.is_anomaly,
    }
}
