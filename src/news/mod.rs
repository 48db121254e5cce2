mod api;
mod model;
mod wire;

pub use api::decode_articles;
pub use model::{Article, ArticleId, Category, MentionedStock, UnknownCategory};

use crate::core::{ArticleFuture, ArticleSource, DashClient, DashError};

impl DashClient {
    /// Fetches the article set for one category.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the request cannot be sent, if the server answers
    /// with a non-2xx status, or if the body is not an article array.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(category = %category)))]
    pub async fn category_news(&self, category: Category) -> Result<Vec<Article>, DashError> {
        api::fetch_category(self, category).await
    }

    /// The full URL a category is fetched from.
    ///
    /// # Errors
    ///
    /// Fails only if the configured base cannot carry path segments.
    pub fn category_url(&self, category: Category) -> Result<url::Url, DashError> {
        api::category_url(self.base_news(), category)
    }
}

impl ArticleSource for DashClient {
    fn fetch_category(&self, category: Category) -> ArticleFuture<'_> {
        Box::pin(self.category_news(category))
    }
}
