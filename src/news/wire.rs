use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Int(i64),
    Text(String),
    Float(f64),
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) id: RawId,
    pub(crate) headline: Option<String>,
    pub(crate) ticker: Option<String>,
    pub(crate) ticker_price: Option<f64>,
    pub(crate) mentioned_stocks: Option<Vec<RawMentionedStock>>,
    pub(crate) event_type: Option<String>,
    pub(crate) sentiment: Option<RawSentiment>,
    pub(crate) is_trusted_source: Option<bool>,
    pub(crate) url: Option<String>,
    pub(crate) datetime: i64,
    pub(crate) source: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) polarity_score: Option<f64>,
    pub(crate) is_anomaly: Option<bool>,
}

#[derive(Deserialize)]
pub(crate) struct RawMentionedStock {
    pub(crate) ticker: String,
    pub(crate) price: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct RawSentiment {
    #[serde(default)]
    pub(crate) positive: Option<f64>,
    #[serde(default)]
    pub(crate) neutral: Option<f64>,
    #[serde(default)]
    pub(crate) negative: Option<f64>,
}
