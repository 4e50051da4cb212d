//! # Rendering Layer
//!
//! Markup generation for the card grid, the favorites list, and marker
//! popups. Rendering here means producing a full replacement markup string
//! from structured data; the host's [`RenderSurface`] turns those strings
//! into visual nodes and applies the purely visual selection effects
//! (highlight, scroll).
//!
//! There is no incremental patching: every render call replaces the whole
//! grid or favorites list, so the output is always a pure function of
//! (filtered view, favorites set).
//!
//! Every data-derived text and attribute value goes through [`escape`]
//! before insertion. The catalog is static today, but the markup contract
//! assumes untrusted data.

use crate::model::{Place, PlaceId};

pub mod favorites;
pub mod grid;

/// Host-provided rendering surface.
///
/// `replace_*` swap the full contents of a region; the remaining methods are
/// the visual half of selection. Highlighting follows a single-highlight
/// policy: the coordinator always calls [`clear_highlights`] before
/// [`highlight`], so a surface never has to track more than one highlighted
/// card.
///
/// [`clear_highlights`]: RenderSurface::clear_highlights
/// [`highlight`]: RenderSurface::highlight
pub trait RenderSurface {
    /// Replace the card grid with `markup`.
    fn replace_grid(&mut self, markup: &str);

    /// Replace the favorites list with `markup`.
    fn replace_favorites(&mut self, markup: &str);

    /// Remove the highlight from every card.
    fn clear_highlights(&mut self);

    /// Highlight the card for `id`, if rendered.
    fn highlight(&mut self, id: &PlaceId);

    /// Scroll the card for `id` into view, if rendered.
    fn scroll_to(&mut self, id: &PlaceId);
}

/// Escape text for insertion into markup, both element content and
/// double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup content for a place marker: name plus the tag line.
pub fn popup(place: &Place) -> String {
    format!(
        "<strong>{}</strong><br/><span class=\"popup-tags\">{}</span>",
        escape(&place.name),
        escape(&place.tags.join(" • "))
    )
}
