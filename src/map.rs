//! # Map Adapter
//!
//! [`MapAdapter`] owns the marker registry: exactly one marker per catalog
//! place, created once at [`MapAdapter::init`] and never destroyed. Filtering
//! and favorites leave the marker set alone; the map always shows the full
//! catalog as a geographic reference.
//!
//! The host supplies a [`MapSurface`] (a Leaflet-style map in the browser, a
//! recording fake in tests). Marker activation travels the other direction:
//! the host turns a marker click into [`Event::MarkerClicked`], which is how
//! map → grid selection stays symmetric with grid → map.
//!
//! [`Event::MarkerClicked`]: crate::app::Event::MarkerClicked

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::ScoutConfig;
use crate::error::Result;
use crate::model::{Catalog, PlaceId};
use crate::render;

/// Opaque handle to a marker created by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Host-provided map surface.
pub trait MapSurface {
    /// Set the visible center and zoom without animation.
    fn set_view(&mut self, lat: f64, lng: f64, zoom: u8);

    /// Create a marker with attached popup content; returns its handle.
    fn add_marker(&mut self, id: &PlaceId, lat: f64, lng: f64, popup: &str)
        -> Result<MarkerHandle>;

    /// Open the popup bound to `marker`.
    fn open_popup(&mut self, marker: MarkerHandle);

    /// Pan and zoom to a coordinate, animated over `duration_ms`.
    fn fly_to(&mut self, lat: f64, lng: f64, zoom: u8, duration_ms: u64);
}

pub struct MapAdapter<M: MapSurface> {
    surface: M,
    markers: HashMap<PlaceId, MarkerHandle>,
}

impl<M: MapSurface> MapAdapter<M> {
    pub fn new(surface: M) -> Self {
        Self {
            surface,
            markers: HashMap::new(),
        }
    }

    /// Set the initial view and create one marker per place.
    ///
    /// Runs once at startup; calling it again on a populated adapter would
    /// duplicate markers, so the app layer never does.
    pub fn init(&mut self, catalog: &Catalog, config: &ScoutConfig) -> Result<()> {
        self.surface
            .set_view(config.center_lat, config.center_lng, config.initial_zoom);
        for place in catalog.iter() {
            let popup = render::popup(place);
            let handle = self
                .surface
                .add_marker(&place.id, place.lat, place.lng, &popup)?;
            self.markers.insert(place.id.clone(), handle);
        }
        debug!("event=map_init markers={}", self.markers.len());
        Ok(())
    }

    /// Pan to a place and open its popup.
    ///
    /// An id without a catalog entry or marker is a logged no-op; focus never
    /// fails visibly.
    pub fn focus(&mut self, catalog: &Catalog, id: &PlaceId, zoom: u8, duration_ms: u64) {
        let (Some(place), Some(&marker)) = (catalog.get(id), self.markers.get(id)) else {
            warn!("event=map_focus id={id} err=unknown_place recovery=skip");
            return;
        };
        self.surface.fly_to(place.lat, place.lng, zoom, duration_ms);
        self.surface.open_popup(marker);
    }

    pub fn marker(&self, id: &PlaceId) -> Option<MarkerHandle> {
        self.markers.get(id).copied()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }
}
