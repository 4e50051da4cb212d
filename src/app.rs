//! # App Facade
//!
//! [`ScoutApp`] is the single owner of all widget state: catalog, filter
//! state, favorites, the visible-id list, the debouncer, and the three host
//! collaborators. There are no ambient globals; every mutation flows through
//! [`ScoutApp::dispatch`], which runs the unidirectional pipeline
//! *mutate state → recompute derived view → render*.
//!
//! ## The dispatch table
//!
//! [`Event`] is the explicit event-to-handler table. Hosts translate raw UI
//! events (keystrokes, clicks, marker taps, timer callbacks) into `Event`
//! values; the core never sees a DOM event. Dispatch applies all rendering
//! and map effects synchronously through the owned surfaces and returns at
//! most one [`Effect`] for the things only the host can do: arming the
//! debounce timer and asking the user to confirm a favorites wipe.
//!
//! ## Event containment
//!
//! A card's favorite toggle sits inside the card's selection target, and a
//! favorite entry's remove button sits inside the entry's selection target.
//! Rather than relying on event-bubbling suppression, the contract is
//! explicit: one activation maps to exactly one event, inner affordance
//! wins. [`Event::from_card_hit`] and [`Event::from_favorite_hit`] encode
//! that priority and are the supported routing for composite activations.
//!
//! ## Generic over collaborators
//!
//! `ScoutApp<K, R, M>` is generic over the persistence, rendering, and map
//! surfaces:
//! - Production: browser-backed implementations
//! - Testing: `MemoryStore` + recording fakes
//!
//! This is what makes every behavior in this crate assertable without a
//! browser environment.

use std::time::Duration;

use log::debug;

use crate::config::ScoutConfig;
use crate::debounce::{DebounceTicket, Debouncer};
use crate::error::Result;
use crate::favorites::FavoritesSet;
use crate::filter::{self, DietChoice, FilterState, PriceChoice};
use crate::map::{MapAdapter, MapSurface};
use crate::model::{Catalog, PlaceId};
use crate::render::{self, RenderSurface};
use crate::select;
use crate::store::KvStore;

/// One user-level occurrence, translated from a raw UI event by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keystroke in the search box. Schedules the debouncer; the query
    /// only applies when the returned ticket fires.
    QueryInput(String),
    /// The host timer armed by [`Effect::Schedule`] elapsed.
    DebounceFired(DebounceTicket),
    DietChanged(DietChoice),
    PriceChanged(PriceChoice),
    MinRatingChanged(f64),
    /// Restore all filter defaults and drop any pending search.
    ResetFilters,
    ToggleFavorite(PlaceId),
    /// The clear-favorites control was activated; the core answers with
    /// [`Effect::ConfirmClearFavorites`] and waits.
    ClearFavoritesRequested,
    /// The host's confirmation step approved the wipe.
    ClearFavoritesConfirmed,
    CardClicked(PlaceId),
    CardHovered(PlaceId),
    FavoriteClicked(PlaceId),
    MarkerClicked(PlaceId),
}

/// Region of a grid card an activation landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    FavoriteToggle,
    Body,
}

/// Region of a favorites entry an activation landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteHit {
    Remove,
    Body,
}

impl Event {
    /// Route an activation on a grid card: the inner toggle consumes it,
    /// anywhere else selects.
    pub fn from_card_hit(id: PlaceId, hit: CardHit) -> Self {
        match hit {
            CardHit::FavoriteToggle => Event::ToggleFavorite(id),
            CardHit::Body => Event::CardClicked(id),
        }
    }

    /// Route an activation on a favorites entry: the remove button consumes
    /// it, anywhere else selects.
    pub fn from_favorite_hit(id: PlaceId, hit: FavoriteHit) -> Self {
        match hit {
            FavoriteHit::Remove => Event::ToggleFavorite(id),
            FavoriteHit::Body => Event::FavoriteClicked(id),
        }
    }
}

/// Work only the host can perform, requested by dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm a timer for `delay`, then dispatch
    /// [`Event::DebounceFired`] with `ticket`.
    Schedule {
        ticket: DebounceTicket,
        delay: Duration,
    },
    /// Ask the user to confirm wiping the favorites, then dispatch
    /// [`Event::ClearFavoritesConfirmed`] if they accept.
    ConfirmClearFavorites,
}

pub struct ScoutApp<K: KvStore, R: RenderSurface, M: MapSurface> {
    catalog: Catalog,
    config: ScoutConfig,
    filter: FilterState,
    favorites: FavoritesSet,
    visible: Vec<PlaceId>,
    debounce: Debouncer,
    store: K,
    surface: R,
    map: MapAdapter<M>,
}

impl<K: KvStore, R: RenderSurface, M: MapSurface> ScoutApp<K, R, M> {
    /// Boot the widget: load favorites (defensively), build the marker set
    /// from the full catalog, compute the initial view, and render
    /// everything once.
    pub fn new(
        catalog: Catalog,
        config: ScoutConfig,
        store: K,
        surface: R,
        map_surface: M,
    ) -> Result<Self> {
        let favorites = FavoritesSet::load(&store, &config.storage_key);
        let debounce = Debouncer::new(config.debounce());
        let mut map = MapAdapter::new(map_surface);
        map.init(&catalog, &config)?;

        let mut app = Self {
            catalog,
            config,
            filter: FilterState::default(),
            favorites,
            visible: Vec::new(),
            debounce,
            store,
            surface,
            map,
        };
        app.refilter();
        app.render_favorites();
        Ok(app)
    }

    /// Run one event through the pipeline. Rendering and map effects apply
    /// synchronously before this returns; the optional [`Effect`] is the
    /// host's follow-up work.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<Effect>> {
        match event {
            Event::QueryInput(query) => {
                let ticket = self.debounce.schedule(query);
                return Ok(Some(Effect::Schedule {
                    ticket,
                    delay: self.debounce.delay(),
                }));
            }
            Event::DebounceFired(ticket) => {
                // Superseded tickets fall through silently; only the latest
                // schedule applies.
                if let Some(query) = self.debounce.fire(ticket) {
                    self.filter.query = query;
                    self.refilter();
                }
            }
            Event::DietChanged(diet) => {
                self.filter.diet = diet;
                self.refilter();
            }
            Event::PriceChanged(price) => {
                self.filter.price = price;
                self.refilter();
            }
            Event::MinRatingChanged(min_rating) => {
                self.filter.min_rating = min_rating;
                self.refilter();
            }
            Event::ResetFilters => {
                self.filter.reset();
                self.debounce.cancel();
                self.refilter();
            }
            Event::ToggleFavorite(id) => {
                let now_favorite = self.favorites.toggle(id.clone());
                debug!("event=favorite_toggle id={id} favorite={now_favorite}");
                self.favorites.save(&mut self.store, &self.config.storage_key)?;
                self.render_grid();
                self.render_favorites();
            }
            Event::ClearFavoritesRequested => {
                return Ok(Some(Effect::ConfirmClearFavorites));
            }
            Event::ClearFavoritesConfirmed => {
                self.favorites.clear();
                self.favorites.save(&mut self.store, &self.config.storage_key)?;
                self.render_grid();
                self.render_favorites();
            }
            Event::CardClicked(id) | Event::FavoriteClicked(id) | Event::MarkerClicked(id) => {
                select::select(
                    &mut self.surface,
                    &mut self.map,
                    &self.catalog,
                    &self.visible,
                    &self.config,
                    &id,
                );
            }
            Event::CardHovered(id) => {
                select::preview(&mut self.map, &self.catalog, &self.config, &id);
            }
        }
        Ok(None)
    }

    /// Recompute the filtered view from scratch and redraw the grid.
    fn refilter(&mut self) {
        let places = filter::apply(&self.catalog, &self.filter);
        self.visible = places.iter().map(|p| p.id.clone()).collect();
        debug!(
            "event=refilter visible={} total={}",
            self.visible.len(),
            self.catalog.len()
        );
        self.render_grid();
    }

    fn render_grid(&mut self) {
        let places: Vec<_> = self
            .visible
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect();
        let markup = render::grid::render(&places, &self.favorites, self.config.badge_limit);
        self.surface.replace_grid(&markup);
    }

    fn render_favorites(&mut self) {
        let markup = render::favorites::render(&self.favorites, &self.catalog);
        self.surface.replace_favorites(&markup);
    }

    // --- Read-only accessors ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Ids of the current filtered view, in catalog order.
    pub fn visible(&self) -> &[PlaceId] {
        &self.visible
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn map(&self) -> &MapAdapter<M> {
        &self.map
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
