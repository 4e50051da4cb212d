//! # Scout Architecture
//!
//! Scout is a **UI-agnostic place-discovery library**. This is not a browser
//! widget that happens to have some library code—it's a library that happens
//! to have browser hosts.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Shape
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (browser shell, test harness)                         │
//! │  - Owns the DOM, the tile map, the timers, the dialogs      │
//! │  - Translates raw UI events into Event values               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ Event            ▲ Effect
//!                              ▼                  │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App Facade (app.rs)                                        │
//! │  - Single owner of all state                                │
//! │  - Dispatch table: mutate → recompute → render              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Logic (filter, favorites, select, debounce, render)   │
//! │  - Pure functions and small owned state                     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborator Traits (store, render, map)                   │
//! │  - KvStore, RenderSurface, MapSurface                       │
//! │  - Host-provided in production, recording fakes in tests    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Single Source of Truth
//!
//! Three visual representations (card grid, favorites list, map markers)
//! derive from two pieces of state: the filter state and the favorites set.
//! Every mutation re-renders the views that depend on it, fully, in the same
//! dispatch call. There is no incremental patching and no view-owned state
//! to drift.
//!
//! Selection is the one cross-view flow that is *not* state: it is a purely
//! visual synchronization (highlight, scroll, map focus) and never touches
//! filters or favorites.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `app.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Option<Effect>>`)
//! - **Never** touches a DOM, a clock, or a storage API directly
//! - **Never** blocks waiting for user input (confirmation is an `Effect`)
//!
//! This means the same core can sit behind a browser shell, a native shell,
//! or a test harness.
//!
//! ## Module Overview
//!
//! - [`app`]: The app facade—entry point for all operations
//! - [`model`]: Core data types (`Place`, `PlaceId`, `Catalog`)
//! - [`filter`]: Filter state and the pure filter engine
//! - [`favorites`]: The ordered, persisted favorites set
//! - [`render`]: Markup generation and the rendering surface trait
//! - [`map`]: Marker registry and the map surface trait
//! - [`select`]: Selection coordination across grid, list, and map
//! - [`debounce`]: Single-slot deferred task for search input
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Widget configuration
//! - [`logging`]: Opt-in file-logging bootstrap
//! - [`error`]: Error types

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod logging;
pub mod map;
pub mod model;
pub mod render;
pub mod select;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use app::{CardHit, Effect, Event, FavoriteHit, ScoutApp};
pub use config::ScoutConfig;
pub use error::{Result, ScoutError};
pub use favorites::FavoritesSet;
pub use filter::{DietChoice, FilterState, PriceChoice};
pub use model::{Catalog, Place, PlaceId};
