use std::sync::Arc;

use sentiment_dashboard::{
    Category, DashError, EventFilter, SortOrder, ViewController,
    core::{ArticleFuture, ArticleSource},
    news::decode_articles,
};

const TECH: &str = r#"[
  {"id": 1, "headline": "Chipmaker beats quarterly revenue estimates", "ticker": "NVDA",
   "ticker_price": 181.81, "event_type": "Earnings Report", "datetime": 1760598000,
   "sentiment": {"positive": 0.81, "neutral": 0.15, "negative": 0.04},
   "is_trusted_source": false, "url": "https://news.example.com/1",
   "mentioned_stocks": [{"ticker": "AMD", "price": 233.08}]},
  {"id": 2, "headline": "Software giant agrees to acquire startup", "ticker": "MSFT",
   "ticker_price": 513.58, "event_type": "M&A Activity", "datetime": 1760601600,
   "sentiment": {"positive": 0.0, "neutral": 0.0, "negative": 0.0},
   "is_trusted_source": true, "source": "Reuters", "url": "https://news.example.com/2"}
]"#;

/// Serves canned JSON; every other category is unavailable.
struct CannedSource;

impl ArticleSource for CannedSource {
    fn fetch_category(&self, category: Category) -> ArticleFuture<'_> {
        Box::pin(async move {
            match category {
                Category::Tech => decode_articles(TECH),
                _ => Err(DashError::Status {
                    status: 503,
                    url: format!("canned://{category}"),
                    detail: Some("no canned data".into()),
                }),
            }
        })
    }
}

#[tokio::main]
async fn main() {
    let mut view = ViewController::new(Arc::new(CannedSource));

    view.mount();
    view.settle().await;
    println!("{}", view.render());

    view.select_sort(SortOrder::Newest);
    view.select_event(EventFilter::only("Earnings Report"));
    println!("{}", view.render());

    view.select_category(Category::OilAndGas);
    view.settle().await;
    println!("{}", view.render());
}
