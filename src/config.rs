//! # Configuration
//!
//! Widget tuning knobs with compiled defaults matching the original
//! interaction design: the storage key, the search debounce delay, the
//! initial map view, the two focus strengths (hover preview vs click focus),
//! and the badge limit on cards.
//!
//! Hosts usually construct `ScoutConfig::default()` and override fields
//! programmatically; [`ScoutConfig::load`] additionally supports a TOML file
//! via `confique` for hosts that want file-based overrides.

use std::path::Path;
use std::time::Duration;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoutConfig {
    /// Storage key for the persisted favorites list.
    #[config(default = "scout:favs")]
    pub storage_key: String,

    /// Quiet period after the last keystroke before the search applies.
    #[config(default = 200)]
    pub debounce_ms: u64,

    /// Initial map center latitude.
    #[config(default = 13.0827)]
    pub center_lat: f64,

    /// Initial map center longitude.
    #[config(default = 80.2707)]
    pub center_lng: f64,

    /// Initial map zoom level.
    #[config(default = 12)]
    pub initial_zoom: u8,

    /// Zoom level for the hover preview.
    #[config(default = 14)]
    pub preview_zoom: u8,

    /// Zoom level for a full selection.
    #[config(default = 15)]
    pub focus_zoom: u8,

    /// Animation duration of the hover preview, in milliseconds.
    #[config(default = 400)]
    pub preview_duration_ms: u64,

    /// Animation duration of a full selection, in milliseconds.
    #[config(default = 500)]
    pub focus_duration_ms: u64,

    /// How many tags render as badges on a card.
    #[config(default = 3)]
    pub badge_limit: usize,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            storage_key: "scout:favs".to_string(),
            debounce_ms: 200,
            center_lat: 13.0827,
            center_lng: 80.2707,
            initial_zoom: 12,
            preview_zoom: 14,
            focus_zoom: 15,
            preview_duration_ms: 400,
            focus_duration_ms: 500,
            badge_limit: 3,
        }
    }
}

impl ScoutConfig {
    /// Load configuration, layering an optional TOML file over the compiled
    /// defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|err| ScoutError::Config(err.to_string()))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
