//! Favorites list markup.
//!
//! Entries follow the favorites set's stored order, most recent first. Ids
//! that no longer resolve in the catalog are skipped; the catalog is static,
//! so a dangling id means stale persisted data, not a render error.

use log::debug;

use crate::favorites::FavoritesSet;
use crate::model::Catalog;
use crate::render::escape;

const EMPTY_LIST: &str =
    "<li class=\"small-muted\">No favorites yet — click the ❤ on a card.</li>";

/// Render the full favorites list.
pub fn render(favorites: &FavoritesSet, catalog: &Catalog) -> String {
    if favorites.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let mut out = String::new();
    for id in favorites.iter() {
        let Some(place) = catalog.get(id) else {
            debug!("event=favorite_dangling id={id} recovery=skip");
            continue;
        };
        out.push_str(&format!(
            "<li class=\"fav-item\" data-id=\"{}\">",
            escape(id.as_str())
        ));
        out.push_str("<div class=\"meta\">");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\"/>",
            escape(&place.image),
            escape(&place.name)
        ));
        out.push_str(&format!(
            "<div><div class=\"fav-name\">{}</div><div class=\"small-muted\">{}</div></div>",
            escape(&place.name),
            escape(&place.tags.join(" • "))
        ));
        out.push_str("</div>");
        out.push_str("<div><button class=\"btn small remove\" data-remove>Remove</button></div>");
        out.push_str("</li>");
    }

    // Every stored id was dangling; show the same placeholder as empty.
    if out.is_empty() {
        return EMPTY_LIST.to_string();
    }
    out
}
