//! Centralized constants for default endpoints and UA.

/// Identifies the dashboard to the news API.
pub(crate) const USER_AGENT: &str = concat!("sentiment-dashboard/", env!("CARGO_PKG_VERSION"));

/// Category news endpoint base (category name is appended as a path segment).
pub(crate) const DEFAULT_BASE_NEWS: &str = "http://127.0.0.1:5001/api/news/category/";
