//! Card grid markup.
//!
//! One card per place in filtered order, or a single placeholder when the
//! filtered view is empty. The favorites set only influences the toggle
//! glyph. Affordances are marked with data attributes: `data-id` on the card
//! (selection), `data-fav` on the toggle button; the event-containment
//! contract for the toggle lives in the app layer's activation routing.

use crate::favorites::FavoritesSet;
use crate::model::Place;
use crate::render::escape;

const EMPTY_GRID: &str =
    "<div class=\"panel small-muted\">No results — try adjusting filters.</div>";

/// Render the full grid for `places` (the current filtered view, in order).
pub fn render(places: &[&Place], favorites: &FavoritesSet, badge_limit: usize) -> String {
    if places.is_empty() {
        return EMPTY_GRID.to_string();
    }

    let mut out = String::new();
    for place in places {
        card(&mut out, place, favorites.is_favorite(&place.id), badge_limit);
    }
    out
}

fn card(out: &mut String, place: &Place, is_favorite: bool, badge_limit: usize) {
    let glyph = if is_favorite { "❤" } else { "♡" };
    let name = escape(&place.name);

    out.push_str(&format!(
        "<article class=\"card\" data-id=\"{}\">",
        escape(place.id.as_str())
    ));

    out.push_str("<div class=\"card-media\">");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\"/>",
        escape(&place.image),
        name
    ));
    out.push_str(&format!(
        "<button class=\"fav-btn\" data-fav>{glyph}</button>"
    ));
    out.push_str("</div>");

    out.push_str("<div class=\"card-body\">");
    out.push_str(&format!(
        "<div class=\"card-title\"><h4>{}</h4><div class=\"price-tier\">{}</div></div>",
        name,
        "$".repeat(usize::from(place.price_tier))
    ));
    out.push_str(&format!(
        "<div class=\"card-desc\">{}</div>",
        escape(&place.description)
    ));

    out.push_str("<div class=\"card-meta\"><div class=\"badges\">");
    for tag in place.tags.iter().take(badge_limit) {
        out.push_str(&format!("<span class=\"badge\">{}</span>", escape(tag)));
    }
    out.push_str("</div>");
    out.push_str(&format!(
        "<div class=\"small-muted\">⭐ {} • {}</div>",
        place.rating,
        escape(&place.hours)
    ));
    out.push_str("</div></div></article>");
}
