//! sentiment-dashboard: client-side core of a market news dashboard.
//!
//! Articles are fetched per [`Category`], filtered by event type, sorted by
//! trust or recency, and rendered with a normalized sentiment bar. The
//! [`ViewController`] ties it together and guards against stale responses when
//! the category changes while a fetch is still in flight.
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use sentiment_dashboard::{Category, DashClient, SortOrder, ViewController};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DashClient::builder().build()?;
//! let mut view = ViewController::new(Arc::new(client));
//!
//! view.mount();
//! view.settle().await;
//!
//! view.select_sort(SortOrder::Newest);
//! println!("{}", view.render());
//!
//! view.select_category(Category::Finance);
//! view.settle().await;
//! println!("{}", view.render());
//! # Ok(())
//! # }
//! ```

pub mod anomaly;
pub mod articles;
pub mod core;
pub mod fetch;
pub mod news;
pub mod sentiment;
pub mod view;

pub use articles::{ArticleListModel, EventFilter, SortOrder};
pub use crate::core::{ArticleSource, DashClient, DashClientBuilder, DashError, ErrorKind};
pub use fetch::{FetchController, FetchState, FetchTicket};
pub use news::{Article, ArticleId, Category, MentionedStock};
pub use sentiment::{Sentiment, SentimentBar};
pub use view::{Screen, ViewController, ViewState};
