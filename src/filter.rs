//! # Filter Engine
//!
//! [`FilterState`] holds the four independent predicates (text query, diet,
//! price tier, minimum rating); [`apply`] derives the filtered view from the
//! catalog. The engine is a pure function: same catalog and state, same
//! output, always in catalog order.
//!
//! Predicates compose with AND. The default state passes every place, so
//! "no filters active" and "reset" are the same value.

use crate::model::{Catalog, Place};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietChoice {
    #[default]
    Any,
    Veg,
    NonVeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceChoice {
    #[default]
    Any,
    Tier(u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub diet: DietChoice,
    pub price: PriceChoice,
    pub min_rating: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            diet: DietChoice::Any,
            price: PriceChoice::Any,
            min_rating: 0.0,
        }
    }
}

impl FilterState {
    /// Restore all predicates to their all-pass defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Derive the filtered view: an order-preserving subsequence of the catalog
/// containing every place that satisfies all four predicates.
pub fn apply<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Place> {
    let query = state.query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|place| matches(place, state, &query))
        .collect()
}

fn matches(place: &Place, state: &FilterState, query: &str) -> bool {
    match state.diet {
        DietChoice::Any => {}
        DietChoice::Veg => {
            if !place.veg {
                return false;
            }
        }
        DietChoice::NonVeg => {
            if place.veg {
                return false;
            }
        }
    }

    if let PriceChoice::Tier(tier) = state.price {
        if place.price_tier != tier {
            return false;
        }
    }

    if place.rating < state.min_rating {
        return false;
    }

    if !query.is_empty() && !haystack(place).contains(query) {
        return false;
    }

    true
}

/// The searchable text of a place: name, description, and tags, joined and
/// lowercased once per candidate.
fn haystack(place: &Place) -> String {
    format!(
        "{} {} {}",
        place.name,
        place.description,
        place.tags.join(" ")
    )
    .to_lowercase()
}
