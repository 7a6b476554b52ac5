//! Request URL builder with percent-encoded path segments and query params.
//!
//! All user-supplied values are percent-encoded (RFC 3986 unreserved set kept,
//! spaces as `%20`), never interpolated raw. Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use scryfall_sdk::UrlBuilder;
//! let url = UrlBuilder::new("https://api.scryfall.com", "cards/search")
//!     .param("q", "name:/bolt/")
//!     .param("order", "name")
//!     .param_if(false, "page", "1")
//!     .build();
//! assert_eq!(
//!     url,
//!     "https://api.scryfall.com/cards/search?q=name%3A%2Fbolt%2F&order=name"
//! );
//! ```

/// Builds request URLs against a base endpoint.
pub struct UrlBuilder {
    base: String,
    path: String,
    segments: Vec<String>,
    params: Vec<(String, String)>,
}

impl UrlBuilder {
    /// Create a builder for `{base}/{path}`.
    ///
    /// `path` is trusted (it comes from [`config`](crate::config)) and is
    /// not encoded.
    pub fn new(base: &str, path: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            path: path.trim_matches('/').to_string(),
            segments: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append a percent-encoded path segment, e.g. a card id.
    pub fn segment(&mut self, value: &str) -> &mut Self {
        self.segments.push(urlencoding::encode(value).into_owned());
        self
    }

    /// Append a `key=value` query parameter. The value is percent-encoded.
    pub fn param(&mut self, key: &str, value: &str) -> &mut Self {
        self.params
            .push((key.to_string(), urlencoding::encode(value).into_owned()));
        self
    }

    /// Append a query parameter only when `condition` holds.
    pub fn param_if(&mut self, condition: bool, key: &str, value: &str) -> &mut Self {
        if condition {
            self.param(key, value);
        }
        self
    }

    /// Build the final URL string.
    pub fn build(&self) -> String {
        let mut url = self.base.clone();
        if !self.path.is_empty() {
            url.push('/');
            url.push_str(&self.path);
        }
        for s in &self.segments {
            url.push('/');
            url.push_str(s);
        }

        if !self.params.is_empty() {
            let query: Vec<String> = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        url
    }
}
