use futures::future::BoxFuture;

use crate::core::DashError;
use crate::news::{Article, Category};

/// A boxed future resolving to a category's article set.
pub type ArticleFuture<'a> = BoxFuture<'a, Result<Vec<Article>, DashError>>;

/// A trait for anything that can supply the article set of a category.
///
/// This decouples the view layer from the HTTP client, so the controller can be
/// driven by a mock source in tests. It is implemented by [`DashClient`](crate::DashClient).
pub trait ArticleSource: Send + Sync {
    /// Asynchronously fetches every article currently published for `category`.
    ///
    /// # Returns
    /// A `Future` that resolves to the decoded articles in server order, or a
    /// `DashError` describing the transport, status, or parse failure.
    fn fetch_category(&self, category: Category) -> ArticleFuture<'_>;
}
