//! Turning raw HTTP responses into records or [`ServiceError`]s.
//!
//! Every operation goes through [`interpret`]; single-card operations then
//! run [`ensure_displayable`] on the decoded record.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ErrorKind, Result, ScryfallError, ServiceError};
use crate::models::CardRecord;
use crate::transport::RawResponse;

/// The API's error object, read one field at a time so that a null or
/// badly typed key only loses that key.
#[derive(Debug, Default)]
struct ErrorBody {
    details: Option<String>,
    status: Option<u16>,
    code: Option<String>,
    error_type: Option<String>,
    warnings: Vec<String>,
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            details: text("details"),
            status: value
                .get("status")
                .and_then(Value::as_u64)
                .and_then(|s| u16::try_from(s).ok()),
            code: text("code"),
            error_type: text("type"),
            warnings: value
                .get("warnings")
                .and_then(Value::as_array)
                .map(|w| w.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

/// Decode a response as `T`, or fail with the error it carries.
///
/// Non-2xx responses become [`ErrorKind::UpstreamRequestFailed`]. When the
/// body is missing or is not an error object, `fallback` is used as the
/// message and the HTTP status as the status. A 2xx body that does not
/// decode as `T` is [`ErrorKind::MalformedResponse`].
pub fn interpret<T: DeserializeOwned>(resp: RawResponse, fallback: &str) -> Result<T> {
    if !resp.is_success() {
        return Err(upstream_error(&resp, fallback).into());
    }

    serde_json::from_slice(&resp.body).map_err(|e| {
        log::debug!("undecodable {} body: {}", resp.status, e);
        ScryfallError::from(ServiceError::malformed(
            resp.status,
            format!("Malformed response from Scryfall: {e}"),
        ))
    })
}

fn upstream_error(resp: &RawResponse, fallback: &str) -> ServiceError {
    let body = ErrorBody::parse(&resp.body);
    let err = ServiceError {
        kind: ErrorKind::UpstreamRequestFailed,
        details: body
            .details
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| fallback.to_string()),
        status: body.status.unwrap_or(resp.status),
        code: body.code,
        error_type: body.error_type,
        warnings: body.warnings,
    };
    log::warn!(
        "Scryfall API error: {} (status {}, code {:?})",
        err.details,
        err.status,
        err.code
    );
    err
}

/// Reject cards that have no artwork at all.
///
/// `status` is the HTTP status of the response the card came from and is
/// carried on the resulting error.
pub fn ensure_displayable(card: CardRecord, status: u16) -> Result<CardRecord> {
    if card.has_artwork() {
        Ok(card)
    } else {
        log::debug!("card {} ({}) has no image data", card.id, card.name);
        Err(ServiceError::no_displayable_image(status).into())
    }
}
