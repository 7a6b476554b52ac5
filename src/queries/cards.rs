//! Card lookups against the Scryfall REST API.

use std::num::NonZeroU32;

use crate::config;
use crate::error::{ErrorKind, Result, ScryfallError, ServiceError};
use crate::models::{CardRecord, SearchResult};
use crate::response::{ensure_displayable, interpret};
use crate::transport::Transport;
use crate::url_builder::UrlBuilder;

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// `GET /cards/named?fuzzy=<name>`
pub fn named_url(base: &str, name: &str) -> String {
    UrlBuilder::new(base, config::NAMED_PATH)
        .param("fuzzy", name)
        .build()
}

/// `GET /cards/search?q=name:/<query>/&order=name&dir=asc[&page=<n>]`
///
/// Page 1 is requested *without* a `page` parameter so that the first page
/// always has the same URL whether or not the caller passed a page.
pub fn search_url(base: &str, query: &str, page: u32) -> String {
    let pattern = format!("name:/{}/", query);
    let page_str = page.to_string();
    UrlBuilder::new(base, config::SEARCH_PATH)
        .param("q", &pattern)
        .param("order", "name")
        .param("dir", "asc")
        .param_if(page > 1, "page", &page_str)
        .build()
}

/// `GET /cards/random`
pub fn random_url(base: &str) -> String {
    UrlBuilder::new(base, config::RANDOM_PATH).build()
}

/// `GET /cards/<id>`
pub fn card_url(base: &str, id: &str) -> String {
    UrlBuilder::new(base, config::CARDS_PATH).segment(id).build()
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for single cards and card searches.
pub struct CardQuery<'a> {
    transport: &'a dyn Transport,
    base_url: &'a str,
    max_random_attempts: Option<NonZeroU32>,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` issuing requests through `transport`.
    ///
    /// `max_random_attempts` caps [`random`](Self::random); `None` retries
    /// for as long as it takes.
    pub fn new(
        transport: &'a dyn Transport,
        base_url: &'a str,
        max_random_attempts: Option<NonZeroU32>,
    ) -> Self {
        Self {
            transport,
            base_url,
            max_random_attempts,
        }
    }

    fn fetch_card(&self, url: &str, fallback: &str) -> Result<CardRecord> {
        log::debug!("GET {}", url);
        let resp = self.transport.get(url)?;
        let status = resp.status;
        log::debug!("{} -> {}", url, status);
        let card: CardRecord = interpret(resp, fallback)?;
        ensure_displayable(card, status)
    }

    // -- Single card lookup ------------------------------------------------

    /// Look up a card by name, tolerating small misspellings.
    ///
    /// Scryfall answers 404 both when nothing matches and when the name is
    /// ambiguous; the returned error carries its explanation.
    pub fn named(&self, name: &str) -> Result<CardRecord> {
        let url = named_url(self.base_url, name);
        self.fetch_card(&url, config::NAMED_FALLBACK)
    }

    /// Fetch a card by its Scryfall id.
    pub fn get(&self, id: &str) -> Result<CardRecord> {
        let url = card_url(self.base_url, id);
        self.fetch_card(&url, config::GET_FALLBACK)
    }

    // -- Random ------------------------------------------------------------

    /// Fetch a random card that has artwork.
    ///
    /// Cards without any image data are discarded and a fresh random card
    /// is requested, one request at a time, with no delay in between.
    ///
    /// **Without a cap this loops until the API hands back a card with
    /// images.** It never terminates if the API only ever returns image-less
    /// cards; set `max_random_attempts` on the builder, or wrap the call in
    /// your own timeout, if that matters to you. Any error other than a
    /// missing image ends the loop immediately.
    pub fn random(&self) -> Result<CardRecord> {
        let url = random_url(self.base_url);
        let mut attempt: u32 = 0;
        loop {
            attempt = attempt.saturating_add(1);
            match self.fetch_card(&url, config::RANDOM_FALLBACK) {
                Err(e) if e.kind() == Some(ErrorKind::NoDisplayableImage) => {
                    if let Some(max) = self.max_random_attempts {
                        if attempt >= max.get() {
                            log::warn!(
                                "giving up on random card after {} image-less picks",
                                attempt
                            );
                            return Err(e);
                        }
                    }
                    log::info!(
                        "random card has no image data, trying again (attempt {})",
                        attempt
                    );
                }
                other => return other,
            }
        }
    }

    // -- Search ------------------------------------------------------------

    /// Search card names containing `query` (case-insensitive), sorted by
    /// name, returning page `page` (1-based).
    ///
    /// Cards without artwork are returned as-is. A payload whose
    /// `has_more` disagrees with its `next_page` cursor is rejected as
    /// malformed.
    pub fn search(&self, query: &str, page: u32) -> Result<SearchResult> {
        if page == 0 {
            return Err(ScryfallError::InvalidArgument(
                "search pages start at 1".to_string(),
            ));
        }

        let url = search_url(self.base_url, query, page);
        log::debug!("GET {}", url);
        let resp = self.transport.get(&url)?;
        let status = resp.status;
        log::debug!("{} -> {}", url, status);

        let result: SearchResult = interpret(resp, config::SEARCH_FALLBACK)?;
        if !result.is_consistent() {
            return Err(ServiceError::malformed(
                status,
                format!(
                    "Malformed response from Scryfall: has_more={} but next_page is {}",
                    result.has_more,
                    if result.next_page.is_some() { "present" } else { "absent" }
                ),
            )
            .into());
        }
        Ok(result)
    }
}
