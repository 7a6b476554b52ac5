use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part of the request/response cycle produced a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The API answered with a non-2xx status.
    UpstreamRequestFailed,
    /// A 2xx response whose body was not the JSON shape we asked for.
    MalformedResponse,
    /// A single-card result without any artwork to show.
    NoDisplayableImage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::UpstreamRequestFailed => "upstream request failed",
            ErrorKind::MalformedResponse => "malformed response",
            ErrorKind::NoDisplayableImage => "no displayable image",
        };
        f.write_str(s)
    }
}

/// Uniform error shape for everything the Scryfall API (or our own
/// validation of its payloads) can reject a lookup with.
///
/// `details`, `status` and `code` mirror the fields of the API's error
/// object. When the API sent no usable body, `details` holds a generic
/// message and `status` the HTTP status of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{details} (status {status})")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub details: String,
    pub status: u16,
    pub code: Option<String>,
    /// Secondary classification sent by the API, e.g. `"ambiguous"`.
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "crate::models::search::null_as_empty")]
    pub warnings: Vec<String>,
}

impl ServiceError {
    /// An error for a 2xx payload that could not be decoded.
    pub fn malformed(status: u16, details: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MalformedResponse,
            details: details.into(),
            status,
            code: None,
            error_type: None,
            warnings: Vec::new(),
        }
    }

    /// An error for a card that carries neither top-level nor face artwork.
    pub fn no_displayable_image(status: u16) -> Self {
        Self {
            kind: ErrorKind::NoDisplayableImage,
            details: crate::config::NO_IMAGE_MESSAGE.to_string(),
            status,
            code: Some("no_image".to_string()),
            error_type: None,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScryfallError {
    #[error("Scryfall error: {0}")]
    Service(#[from] ServiceError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

impl ScryfallError {
    /// The uniform service error, if this is one.
    pub fn service(&self) -> Option<&ServiceError> {
        match self {
            ScryfallError::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Shorthand for `self.service().map(|e| e.kind)`.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.service().map(|e| e.kind)
    }
}

pub type Result<T> = std::result::Result<T, ScryfallError>;
