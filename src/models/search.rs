use serde::{Deserialize, Deserializer, Serialize};

use super::card::CardRecord;

/// One page of a card search.
///
/// `data` keeps the order the API returned (name ascending for the queries
/// this crate builds). Cards without artwork are *not* filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub data: Vec<CardRecord>,
    pub total_cards: u64,
    pub has_more: bool,
    pub next_page: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub warnings: Vec<String>,
}

impl SearchResult {
    /// `has_more` must agree with the presence of a `next_page` cursor.
    pub fn is_consistent(&self) -> bool {
        self.has_more == self.next_page.is_some()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Scryfall sends `"warnings": null` as often as it omits the key.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
