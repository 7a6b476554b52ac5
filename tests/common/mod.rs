//! Shared test fixtures for the Scryfall SDK integration tests.
//!
//! Provides a `ScriptedTransport` that replays queued responses and records
//! every URL it was asked for, plus sample card / error payloads built with
//! `serde_json::json!`.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use scryfall_sdk::{CardLookupClient, RawResponse, Result, ScryfallError, Transport};
use serde_json::{json, Value};

pub const BASE: &str = "https://api.example.test";

// ---------------------------------------------------------------------------
// ScriptedTransport
// ---------------------------------------------------------------------------

enum Step {
    Respond(RawResponse),
    Fail,
}

#[derive(Default)]
struct Script {
    steps: VecDeque<Step>,
    requests: Vec<String>,
}

/// In-memory transport. Clones share the same script and request log, so a
/// test can keep one handle after giving another to the client builder.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub fn respond_json(&self, status: u16, body: &Value) -> &Self {
        let bytes = serde_json::to_vec(body).unwrap();
        self.respond_raw(status, bytes)
    }

    /// Queue a response with an arbitrary body.
    pub fn respond_raw(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.script
            .lock()
            .unwrap()
            .steps
            .push_back(Step::Respond(RawResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure (no response at all).
    pub fn fail(&self) -> &Self {
        self.script.lock().unwrap().steps.push_back(Step::Fail);
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(url.to_string());
        match script.steps.pop_front() {
            Some(Step::Respond(resp)) => Ok(resp),
            Some(Step::Fail) => Err(transport_error()),
            None => panic!("no scripted response left for {url}"),
        }
    }
}

/// A genuine `reqwest` error, obtained without touching the network.
pub fn transport_error() -> ScryfallError {
    let err = reqwest::blocking::Client::new()
        .get("not a url")
        .send()
        .unwrap_err();
    ScryfallError::Http(err)
}

/// A client wired to `transport`, pointed at [`BASE`].
pub fn client_with(transport: &ScriptedTransport) -> CardLookupClient {
    CardLookupClient::builder()
        .base_url(BASE)
        .transport(transport.clone())
        .build()
        .unwrap()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

pub fn image_uris(slug: &str) -> Value {
    json!({
        "small": format!("https://cards.example.test/small/{slug}.jpg"),
        "normal": format!("https://cards.example.test/normal/{slug}.jpg"),
        "large": format!("https://cards.example.test/large/{slug}.jpg"),
        "png": format!("https://cards.example.test/png/{slug}.png"),
        "art_crop": format!("https://cards.example.test/art_crop/{slug}.jpg"),
        "border_crop": format!("https://cards.example.test/border_crop/{slug}.jpg")
    })
}

/// A normal single-faced card with artwork.
pub fn card_json(id: &str, name: &str) -> Value {
    json!({
        "object": "card",
        "id": id,
        "name": name,
        "type_line": "Artifact",
        "oracle_text": "{T}, Sacrifice Black Lotus: Add three mana of any one color.",
        "image_uris": image_uris(id),
        "scryfall_uri": format!("https://scryfall.example.test/card/{id}"),
        "layout": "normal",
        "rarity": "rare",
        "set_name": "Limited Edition Alpha",
        "mana_cost": "{0}",
        "lang": "en",
        "prices": { "usd": null }
    })
}

/// A card with no artwork anywhere.
pub fn imageless_card_json(id: &str, name: &str) -> Value {
    json!({
        "object": "card",
        "id": id,
        "name": name,
        "type_line": "Card",
        "scryfall_uri": format!("https://scryfall.example.test/card/{id}"),
        "layout": "art_series"
    })
}

/// A transforming card whose images live on the faces.
///
/// When `front_has_images` is false, only the back face carries images.
pub fn double_faced_card_json(id: &str, front_has_images: bool) -> Value {
    let mut front = json!({
        "name": "Delver of Secrets",
        "type_line": "Creature — Human Wizard",
        "oracle_text": "At the beginning of your upkeep, look at the top card of your library.",
        "mana_cost": "{U}"
    });
    if front_has_images {
        front["image_uris"] = image_uris(&format!("{id}-front"));
    }
    json!({
        "object": "card",
        "id": id,
        "name": "Delver of Secrets // Insectile Aberration",
        "type_line": "Creature — Human Wizard // Creature — Human Insect",
        "scryfall_uri": format!("https://scryfall.example.test/card/{id}"),
        "layout": "transform",
        "rarity": "common",
        "set_name": "Innistrad",
        "card_faces": [
            front,
            {
                "name": "Insectile Aberration",
                "type_line": "Creature — Human Insect",
                "oracle_text": "Flying",
                "mana_cost": "",
                "image_uris": image_uris(&format!("{id}-back"))
            }
        ]
    })
}

pub fn error_json(details: &str, status: u16, code: &str) -> Value {
    json!({
        "object": "error",
        "details": details,
        "status": status,
        "code": code
    })
}

pub fn search_json(cards: Vec<Value>, total: u64, next_page: Option<&str>) -> Value {
    let mut body = json!({
        "object": "list",
        "total_cards": total,
        "has_more": next_page.is_some(),
        "data": cards
    });
    if let Some(next) = next_page {
        body["next_page"] = json!(next);
    }
    body
}
