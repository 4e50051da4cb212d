//! Recording fakes and fixtures shared by the unit tests (and exported to
//! downstream test suites behind the `test_utils` feature).

use crate::error::Result;
use crate::map::{MapSurface, MarkerHandle};
use crate::model::{Catalog, Place, PlaceId};
use crate::render::RenderSurface;

/// Rendering surface that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub grid: String,
    pub favorites: String,
    pub grid_renders: usize,
    pub favorites_renders: usize,
    pub highlighted: Option<PlaceId>,
    pub scrolled_to: Option<PlaceId>,
    pub highlight_clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for RecordingSurface {
    fn replace_grid(&mut self, markup: &str) {
        self.grid = markup.to_string();
        self.grid_renders += 1;
    }

    fn replace_favorites(&mut self, markup: &str) {
        self.favorites = markup.to_string();
        self.favorites_renders += 1;
    }

    fn clear_highlights(&mut self) {
        self.highlighted = None;
        self.highlight_clears += 1;
    }

    fn highlight(&mut self, id: &PlaceId) {
        self.highlighted = Some(id.clone());
    }

    fn scroll_to(&mut self, id: &PlaceId) {
        self.scrolled_to = Some(id.clone());
    }
}

/// Map surface that records views, markers, popups, and fly-tos.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub view: Option<(f64, f64, u8)>,
    pub markers: Vec<(PlaceId, f64, f64, String)>,
    pub popups: Vec<MarkerHandle>,
    pub fly_tos: Vec<(f64, f64, u8, u64)>,
    next_handle: u64,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for RecordingMap {
    fn set_view(&mut self, lat: f64, lng: f64, zoom: u8) {
        self.view = Some((lat, lng, zoom));
    }

    fn add_marker(
        &mut self,
        id: &PlaceId,
        lat: f64,
        lng: f64,
        popup: &str,
    ) -> Result<MarkerHandle> {
        self.next_handle += 1;
        self.markers.push((id.clone(), lat, lng, popup.to_string()));
        Ok(MarkerHandle(self.next_handle))
    }

    fn open_popup(&mut self, marker: MarkerHandle) {
        self.popups.push(marker);
    }

    fn fly_to(&mut self, lat: f64, lng: f64, zoom: u8, duration_ms: u64) {
        self.fly_tos.push((lat, lng, zoom, duration_ms));
    }
}

/// A place with sensible defaults for tests.
pub fn place(id: &str, veg: bool, price_tier: u8, rating: f64, tags: &[&str]) -> Place {
    Place {
        id: id.into(),
        name: format!("Place {id}"),
        description: format!("Description of {id}"),
        hours: "9am-9pm".into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        veg,
        price_tier,
        rating,
        lat: 13.05,
        lng: 80.25,
        image: format!("{id}.jpg"),
    }
}

/// The two-place fixture from the widget's behavior contract: a veg cafe and
/// a non-veg grill.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        place("a", true, 1, 4.5, &["cafe"]),
        place("b", false, 3, 3.0, &["grill"]),
    ])
    .unwrap()
}
