//! Async wrapper around [`CardLookupClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every lookup on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking `reqwest` client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use scryfall_sdk::AsyncCardLookupClient;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = AsyncCardLookupClient::builder().build().await.unwrap();
//!
//!     let card = client.lookup_by_name("Black Lotus").await.unwrap();
//!
//!     // Run anything on the sync client via closure
//!     let page = client.run(|c| c.search("lotus", 2)).await.unwrap();
//! }
//! ```

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, ScryfallError};
use crate::models::{CardRecord, SearchResult};
use crate::transport::Transport;
use crate::{CardLookupClient, CardLookupClientBuilder};

// ---------------------------------------------------------------------------
// AsyncCardLookupClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCardLookupClient`].
///
/// Mirrors [`CardLookupClientBuilder`]; see its methods for defaults.
#[derive(Default)]
pub struct AsyncCardLookupClientBuilder {
    inner: CardLookupClientBuilder,
}

impl AsyncCardLookupClientBuilder {
    /// Point the client at another Scryfall-compatible endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the per-request HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the `User-Agent` sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Cap the number of random draws.
    pub fn max_random_attempts(mut self, max: Option<NonZeroU32>) -> Self {
        self.inner = self.inner.max_random_attempts(max);
        self
    }

    /// Use a custom transport instead of the built-in `reqwest` one.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    /// Build the async client.
    ///
    /// Construction runs on the blocking thread pool: the blocking `reqwest`
    /// client must not be created inside an async context.
    pub async fn build(self) -> Result<AsyncCardLookupClient> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = inner.build()?;
            Ok(AsyncCardLookupClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| ScryfallError::TaskJoin(e.to_string()))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCardLookupClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`CardLookupClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client holds no mutable state, so it
/// is shared through an [`Arc`] without locking. Cloning is cheap.
#[derive(Clone)]
pub struct AsyncCardLookupClient {
    inner: Arc<CardLookupClient>,
}

impl AsyncCardLookupClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCardLookupClientBuilder {
        AsyncCardLookupClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// The closure receives a `&CardLookupClient` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CardLookupClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| ScryfallError::TaskJoin(e.to_string()))?
    }

    /// Async [`CardLookupClient::lookup_by_name`].
    pub async fn lookup_by_name(&self, query: &str) -> Result<CardRecord> {
        let query = query.to_string();
        self.run(move |c| c.lookup_by_name(&query)).await
    }

    /// Async [`CardLookupClient::search`].
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchResult> {
        let query = query.to_string();
        self.run(move |c| c.search(&query, page)).await
    }

    /// Async [`CardLookupClient::random_card`].
    ///
    /// Dropping the returned future does not stop an unbounded retry loop
    /// already running on the blocking pool; configure
    /// `max_random_attempts` if that matters.
    pub async fn random_card(&self) -> Result<CardRecord> {
        self.run(|c| c.random_card()).await
    }

    /// Async [`CardLookupClient::get_card`].
    pub async fn get_card(&self, id: &str) -> Result<CardRecord> {
        let id = id.to_string();
        self.run(move |c| c.get_card(&id)).await
    }

    /// The wrapped sync client.
    pub fn blocking(&self) -> &CardLookupClient {
        &self.inner
    }
}
