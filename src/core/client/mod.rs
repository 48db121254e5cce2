//! Public client surface + builder.
//! Defaults (UA and endpoint base) live in `constants`.

mod constants;

use crate::core::DashError;
use constants::{DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the category news API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DashClient {
    http: Client,
    base_news: Url,
}

impl Default for DashClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DashClient {
    /// Create a new builder.
    pub fn builder() -> DashClientBuilder {
        DashClientBuilder::default()
    }

    /// The base URL category names are appended to.
    pub fn base_news(&self) -> &Url {
        &self.base_news
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DashClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl DashClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the category news base (e.g., `http://127.0.0.1:5001/api/news/category/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if the default base URL cannot be parsed, if the base cannot carry
    /// path segments, or if the TLS backend cannot be initialized.
    pub fn build(self) -> Result<DashClient, DashError> {
        let base_news = match self.base_news {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        if base_news.cannot_be_a_base() {
            return Err(DashError::InvalidBase(base_news.to_string()));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(DashClient {
            http: httpb.build()?,
            base_news,
        })
    }
}
