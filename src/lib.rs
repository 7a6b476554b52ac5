//! Scryfall SDK for Rust.
//!
//! A small blocking client for looking up Magic: The Gathering cards on the
//! [Scryfall API](https://scryfall.com/docs/api): fuzzy lookup by name,
//! paginated name search, random cards and lookup by id. Every failure,
//! whether reported by the API or found while checking its payload, comes
//! back as a [`ServiceError`] with a message, status and machine code.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_sdk::CardLookupClient;
//!
//! let client = CardLookupClient::builder().build().unwrap();
//!
//! let bolt = client.lookup_by_name("lightnig bolt").unwrap();
//! let page = client.search("dragon", 1).unwrap();
//! let surprise = client.random_card().unwrap();
//! let same = client.get_card(&bolt.id).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod response;
pub mod transport;
pub mod url_builder;

#[cfg(feature = "async")]
pub use async_client::AsyncCardLookupClient;
pub use error::{ErrorKind, Result, ScryfallError, ServiceError};
pub use models::{Artwork, CardFace, CardRecord, ImageUris, SearchResult};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use url_builder::UrlBuilder;

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CardLookupClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardLookupClient`].
///
/// Use [`CardLookupClient::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](CardLookupClientBuilder::build).
pub struct CardLookupClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    max_random_attempts: Option<NonZeroU32>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for CardLookupClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::default_user_agent(),
            max_random_attempts: None,
            transport: None,
        }
    }
}

impl CardLookupClientBuilder {
    /// Point the client at another Scryfall-compatible endpoint.
    ///
    /// Defaults to `https://api.scryfall.com`. Trailing slashes are ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = config::normalize_base_url(&url.into());
        self
    }

    /// Set the per-request HTTP timeout.
    ///
    /// Defaults to 30 seconds. This bounds each request, not
    /// [`random_card`](CardLookupClient::random_card) as a whole.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` sent with every request.
    ///
    /// Scryfall asks API clients to identify themselves. Defaults to
    /// `scryfall-sdk/<version>`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Cap how many random cards [`random_card`](CardLookupClient::random_card)
    /// will draw while looking for one with artwork.
    ///
    /// Defaults to `None`: keep drawing until one has images.
    pub fn max_random_attempts(mut self, max: Option<NonZeroU32>) -> Self {
        self.max_random_attempts = max;
        self
    }

    /// Use a custom transport instead of the built-in `reqwest` one.
    ///
    /// `timeout` and `user_agent` are ignored when a transport is supplied.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client.
    ///
    /// Fails only if the HTTP client cannot be constructed or the base URL
    /// is empty. No request is made.
    pub fn build(self) -> Result<CardLookupClient> {
        if self.base_url.is_empty() {
            return Err(ScryfallError::InvalidArgument(
                "base URL must not be empty".to_string(),
            ));
        }
        let transport: Box<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Box::new(HttpTransport::new(self.timeout, &self.user_agent)?),
        };
        Ok(CardLookupClient {
            base_url: self.base_url,
            max_random_attempts: self.max_random_attempts,
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// CardLookupClient
// ---------------------------------------------------------------------------

/// The main entry point for the Scryfall SDK.
///
/// Holds only configuration and a transport; calls share no state and may
/// be issued concurrently from several threads.
///
/// Created via [`CardLookupClient::builder()`].
pub struct CardLookupClient {
    base_url: String,
    max_random_attempts: Option<NonZeroU32>,
    transport: Box<dyn Transport>,
}

impl CardLookupClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CardLookupClientBuilder {
        CardLookupClientBuilder::default()
    }

    /// Access the card query interface.
    pub fn cards(&self) -> queries::CardQuery<'_> {
        queries::CardQuery::new(
            &*self.transport,
            &self.base_url,
            self.max_random_attempts,
        )
    }

    // -- Operations --------------------------------------------------------

    /// Fuzzy lookup of a single card by name.
    ///
    /// Fails with [`ErrorKind::UpstreamRequestFailed`] when Scryfall finds no
    /// match or too many, and with [`ErrorKind::NoDisplayableImage`] when the
    /// match has no artwork.
    pub fn lookup_by_name(&self, query: &str) -> Result<CardRecord> {
        self.cards().named(query)
    }

    /// Case-insensitive substring search on card names, ordered by name.
    ///
    /// `page` is 1-based; page 1 and [`search_first_page`](Self::search_first_page)
    /// request the same URL.
    pub fn search(&self, query: &str, page: u32) -> Result<SearchResult> {
        self.cards().search(query, page)
    }

    /// [`search`](Self::search) with the default page.
    pub fn search_first_page(&self, query: &str) -> Result<SearchResult> {
        self.search(query, 1)
    }

    /// A random card with artwork.
    ///
    /// See [`CardQuery::random`](queries::CardQuery::random): unless a cap
    /// was configured, this retries until a card with images comes back.
    pub fn random_card(&self) -> Result<CardRecord> {
        self.cards().random()
    }

    /// A card by its Scryfall id.
    pub fn get_card(&self, id: &str) -> Result<CardRecord> {
        self.cards().get(id)
    }

    // -- URL helpers -------------------------------------------------------

    /// The exact URL [`search`](Self::search) requests for `query` and `page`.
    pub fn search_url(&self, query: &str, page: u32) -> String {
        queries::cards::search_url(&self.base_url, query, page)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CardLookupClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cap = match self.max_random_attempts {
            Some(n) => n.to_string(),
            None => "unbounded".to_string(),
        };
        write!(
            f,
            "CardLookupClient(base_url={}, max_random_attempts={})",
            self.base_url, cap
        )
    }
}
