//! Core components of the `sentiment-dashboard` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The HTTP [`DashClient`] and its builder.
//! - The primary [`DashError`] type.
//! - The [`ArticleSource`] seam the view layer fetches through.

/// The HTTP client (`DashClient`), builder, and configuration.
pub mod client;
/// The primary error type (`DashError`) for the crate.
pub mod error;
/// Service traits decoupling the view layer from the network.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DashClient`
pub use client::{DashClient, DashClientBuilder};
pub use error::{DashError, ErrorKind};
pub use services::{ArticleFuture, ArticleSource};
