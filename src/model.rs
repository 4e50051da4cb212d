//! # Domain Model: Places and the Catalog
//!
//! A [`Place`] is one venue in the catalog: display text, tags, a diet flag,
//! a price tier, a rating, and coordinates. The [`Catalog`] is the ordered,
//! read-only collection every other component derives its views from.
//!
//! ## Invariants
//!
//! - All place ids in a catalog are unique. Duplicates are rejected at
//!   construction ([`ScoutError::DuplicatePlaceId`]), never at lookup time.
//! - A catalog is never resized or reordered after construction. Filtered
//!   views, favorites, and markers all join back to it through [`PlaceId`].
//!
//! ## Serialization
//!
//! `Place` follows the camelCase field names of the dataset format
//! (`priceTier`, not `price_tier`), so a catalog can be loaded straight from
//! the dataset JSON with [`Catalog::from_json`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Stable identifier of a place, the sole cross-component join key.
///
/// Serializes as a bare string, which keeps the persisted favorites format a
/// plain list of ids (`["p3","p1"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    pub hours: String,
    pub tags: Vec<String>,
    pub veg: bool,
    /// Price tier, 1..N, rendered as repeated currency glyphs.
    pub price_tier: u8,
    pub rating: f64,
    pub lat: f64,
    pub lng: f64,
    /// Display asset reference for the card and favorites thumbnails.
    pub image: String,
}

/// The ordered, read-only place collection, fixed at load time.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    by_id: HashMap<PlaceId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(places: Vec<Place>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(places.len());
        for (pos, place) in places.iter().enumerate() {
            if by_id.insert(place.id.clone(), pos).is_some() {
                return Err(ScoutError::DuplicatePlaceId(place.id.clone()));
            }
        }
        Ok(Self { places, by_id })
    }

    /// Parse a catalog from dataset JSON (an array of places).
    pub fn from_json(json: &str) -> Result<Self> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Self::new(places)
    }

    pub fn get(&self, id: &PlaceId) -> Option<&Place> {
        self.by_id.get(id).map(|&pos| &self.places[pos])
    }

    pub fn contains(&self, id: &PlaceId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Places in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
