//! Unit tests for UrlBuilder and the endpoint URL helpers.

use scryfall_sdk::queries::cards::{card_url, named_url, random_url, search_url};
use scryfall_sdk::UrlBuilder;

const BASE: &str = "https://api.scryfall.com";

// ---------------------------------------------------------------------------
// UrlBuilder
// ---------------------------------------------------------------------------

#[test]
fn new_joins_base_and_path() {
    let url = UrlBuilder::new(BASE, "cards/random").build();
    assert_eq!(url, "https://api.scryfall.com/cards/random");
}

#[test]
fn trailing_and_leading_slashes_are_collapsed() {
    let url = UrlBuilder::new("https://api.scryfall.com/", "/cards/random/").build();
    assert_eq!(url, "https://api.scryfall.com/cards/random");
}

#[test]
fn params_are_joined_in_order() {
    let url = UrlBuilder::new(BASE, "cards/search")
        .param("order", "name")
        .param("dir", "asc")
        .build();
    assert_eq!(url, "https://api.scryfall.com/cards/search?order=name&dir=asc");
}

#[test]
fn param_values_are_percent_encoded() {
    let url = UrlBuilder::new(BASE, "cards/named")
        .param("fuzzy", "Æther Vial & co")
        .build();
    assert_eq!(
        url,
        "https://api.scryfall.com/cards/named?fuzzy=%C3%86ther%20Vial%20%26%20co"
    );
}

#[test]
fn unreserved_characters_are_left_alone() {
    let url = UrlBuilder::new(BASE, "cards/named")
        .param("fuzzy", "a-b_c.d~e")
        .build();
    assert!(url.ends_with("fuzzy=a-b_c.d~e"));
}

#[test]
fn param_if_false_is_skipped() {
    let url = UrlBuilder::new(BASE, "cards/search")
        .param("q", "x")
        .param_if(false, "page", "1")
        .build();
    assert!(!url.contains("page"));
}

#[test]
fn param_if_true_is_added() {
    let url = UrlBuilder::new(BASE, "cards/search")
        .param("q", "x")
        .param_if(true, "page", "4")
        .build();
    assert!(url.ends_with("?q=x&page=4"));
}

#[test]
fn segments_are_encoded() {
    let url = UrlBuilder::new(BASE, "cards").segment("a b/c").build();
    assert_eq!(url, "https://api.scryfall.com/cards/a%20b%2Fc");
}

// ---------------------------------------------------------------------------
// Endpoint helpers
// ---------------------------------------------------------------------------

#[test]
fn named_url_shape() {
    assert_eq!(
        named_url(BASE, "Black Lotus"),
        "https://api.scryfall.com/cards/named?fuzzy=Black%20Lotus"
    );
}

#[test]
fn random_url_shape() {
    assert_eq!(random_url(BASE), "https://api.scryfall.com/cards/random");
}

#[test]
fn card_url_shape() {
    assert_eq!(
        card_url(BASE, "0000579f-7b35-4ed3-b44c-db2a538066fe"),
        "https://api.scryfall.com/cards/0000579f-7b35-4ed3-b44c-db2a538066fe"
    );
}

#[test]
fn search_url_wraps_query_as_name_pattern() {
    assert_eq!(
        search_url(BASE, "drag", 1),
        "https://api.scryfall.com/cards/search?q=name%3A%2Fdrag%2F&order=name&dir=asc"
    );
}

#[test]
fn search_url_page_one_has_no_page_param() {
    assert!(!search_url(BASE, "drag", 1).contains("page"));
}

#[test]
fn search_url_page_two_has_page_param() {
    assert!(search_url(BASE, "drag", 2).contains("page=2"));
}
