//! # Selection Coordinator
//!
//! Routes a user selection to its visual consequences across grid, favorites
//! list, and map. Selection is purely visual synchronization: it never
//! mutates the filter state or the favorites set, and repeating it for the
//! same id just re-applies the same visual state.
//!
//! Two strengths exist, matching the original interaction design: hovering a
//! card previews it on the map only; clicking performs the full selection.

use log::debug;

use crate::config::ScoutConfig;
use crate::map::{MapAdapter, MapSurface};
use crate::model::{Catalog, PlaceId};
use crate::render::RenderSurface;

/// Full selection: single-highlight the card (clear all, then apply), scroll
/// it into view, and focus the map.
///
/// If `id` is filtered out of `visible`, the highlight and scroll degrade to
/// no-ops; the map focus still happens.
pub fn select<R: RenderSurface, M: MapSurface>(
    surface: &mut R,
    map: &mut MapAdapter<M>,
    catalog: &Catalog,
    visible: &[PlaceId],
    config: &ScoutConfig,
    id: &PlaceId,
) {
    surface.clear_highlights();
    if visible.contains(id) {
        surface.highlight(id);
        surface.scroll_to(id);
    } else {
        debug!("event=select id={id} card=filtered_out");
    }
    map.focus(catalog, id, config.focus_zoom, config.focus_duration_ms);
}

/// Hover preview: map focus only, with the lighter transition.
pub fn preview<M: MapSurface>(
    map: &mut MapAdapter<M>,
    catalog: &Catalog,
    config: &ScoutConfig,
    id: &PlaceId,
) {
    map.focus(catalog, id, config.preview_zoom, config.preview_duration_ms);
}
