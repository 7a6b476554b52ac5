use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com";

pub const NAMED_PATH: &str = "cards/named";
pub const SEARCH_PATH: &str = "cards/search";
pub const RANDOM_PATH: &str = "cards/random";
pub const CARDS_PATH: &str = "cards";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Redirects followed by the HTTP transport before giving up.
pub const MAX_REDIRECTS: usize = 10;

pub const ACCEPT: &str = "application/json";

// Fallback messages for error responses that arrive without `details`.
pub const NAMED_FALLBACK: &str = "Failed to fetch card data";
pub const SEARCH_FALLBACK: &str = "Failed to fetch search results";
pub const RANDOM_FALLBACK: &str = "Failed to fetch random card";
pub const GET_FALLBACK: &str = "Card not found";

pub const NO_IMAGE_MESSAGE: &str = "No image data available for this card";

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Normalize a user-supplied base URL so paths can be appended with a single `/`.
pub fn normalize_base_url(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
