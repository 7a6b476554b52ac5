use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ImageUris
// ---------------------------------------------------------------------------

/// The image set Scryfall publishes for a card or a card face.
///
/// Sizes missing from the payload decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImageUris {
    pub small: String,
    pub normal: String,
    pub large: String,
    pub png: String,
    pub art_crop: String,
    pub border_crop: String,
}

// ---------------------------------------------------------------------------
// CardFace
// ---------------------------------------------------------------------------

/// One printed side of a split, flip, transforming or double-faced card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CardFace {
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub mana_cost: Option<String>,
    pub image_uris: Option<ImageUris>,
}

// ---------------------------------------------------------------------------
// CardRecord
// ---------------------------------------------------------------------------

/// A card object as returned by the Scryfall API.
///
/// Only the fields a display-oriented caller needs are kept; everything
/// else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    // Absent on a few layouts (e.g. reversible cards), where it lives on the faces.
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub image_uris: Option<ImageUris>,
    pub card_faces: Option<Vec<CardFace>>,
    pub scryfall_uri: String,
    pub layout: Option<String>,
    pub rarity: Option<String>,
    pub set_name: Option<String>,
    pub mana_cost: Option<String>,
}

impl CardRecord {
    /// The artwork this card can be displayed with, if any.
    ///
    /// Top-level images win. Otherwise the card counts as displayable only
    /// when its first face carries an image set.
    pub fn artwork(&self) -> Option<Artwork<'_>> {
        if let Some(images) = &self.image_uris {
            return Some(Artwork::SingleFaced(images));
        }
        match self.card_faces.as_deref() {
            Some(faces) if faces.first().is_some_and(|f| f.image_uris.is_some()) => {
                Some(Artwork::MultiFaced(faces))
            }
            _ => None,
        }
    }

    /// `true` when [`artwork`](Self::artwork) would return `Some`.
    pub fn has_artwork(&self) -> bool {
        self.artwork().is_some()
    }

    /// The faces of this card, or an empty slice for single-faced cards.
    pub fn faces(&self) -> &[CardFace] {
        self.card_faces.as_deref().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Artwork
// ---------------------------------------------------------------------------

/// Where a displayable card keeps its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork<'a> {
    /// One image set for the whole card.
    SingleFaced(&'a ImageUris),
    /// Per-face images; the first face is guaranteed to have a set.
    MultiFaced(&'a [CardFace]),
}

impl<'a> Artwork<'a> {
    /// The image set to show first: the card's own, or its first face's.
    pub fn primary(&self) -> Option<&'a ImageUris> {
        match *self {
            Artwork::SingleFaced(images) => Some(images),
            Artwork::MultiFaced(faces) => faces.first().and_then(|f| f.image_uris.as_ref()),
        }
    }

    /// Every image set available, in face order.
    pub fn all(&self) -> Vec<&'a ImageUris> {
        match *self {
            Artwork::SingleFaced(images) => vec![images],
            Artwork::MultiFaced(faces) => faces
                .iter()
                .filter_map(|f| f.image_uris.as_ref())
                .collect(),
        }
    }
}
