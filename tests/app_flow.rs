//! End-to-end flows through the app facade: boot, filter, favorite, select,
//! and persist, all against recording fakes and the in-memory store.

use scout::app::{Effect, Event, ScoutApp};
use scout::config::ScoutConfig;
use scout::error::Result;
use scout::filter::DietChoice;
use scout::map::{MapSurface, MarkerHandle};
use scout::model::{Catalog, Place, PlaceId};
use scout::render::RenderSurface;
use scout::store::fs::FileStore;
use scout::store::memory::MemoryStore;
use scout::store::{KvStore, FAVORITES_KEY};

#[derive(Debug, Default)]
struct FakeSurface {
    grid: String,
    favorites: String,
    highlighted: Option<PlaceId>,
    scrolled_to: Option<PlaceId>,
}

impl RenderSurface for FakeSurface {
    fn replace_grid(&mut self, markup: &str) {
        self.grid = markup.to_string();
    }

    fn replace_favorites(&mut self, markup: &str) {
        self.favorites = markup.to_string();
    }

    fn clear_highlights(&mut self) {
        self.highlighted = None;
    }

    fn highlight(&mut self, id: &PlaceId) {
        self.highlighted = Some(id.clone());
    }

    fn scroll_to(&mut self, id: &PlaceId) {
        self.scrolled_to = Some(id.clone());
    }
}

#[derive(Debug, Default)]
struct FakeMap {
    markers: Vec<PlaceId>,
    fly_tos: Vec<(f64, f64, u8, u64)>,
    popups: Vec<MarkerHandle>,
    next_handle: u64,
}

impl MapSurface for FakeMap {
    fn set_view(&mut self, _lat: f64, _lng: f64, _zoom: u8) {}

    fn add_marker(
        &mut self,
        id: &PlaceId,
        _lat: f64,
        _lng: f64,
        _popup: &str,
    ) -> Result<MarkerHandle> {
        self.next_handle += 1;
        self.markers.push(id.clone());
        Ok(MarkerHandle(self.next_handle))
    }

    fn open_popup(&mut self, marker: MarkerHandle) {
        self.popups.push(marker);
    }

    fn fly_to(&mut self, lat: f64, lng: f64, zoom: u8, duration_ms: u64) {
        self.fly_tos.push((lat, lng, zoom, duration_ms));
    }
}

fn place(id: &str, veg: bool, tier: u8, rating: f64, tags: &[&str]) -> Place {
    Place {
        id: id.into(),
        name: format!("Place {id}"),
        description: format!("Description of {id}"),
        hours: "9am-9pm".into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        veg,
        price_tier: tier,
        rating,
        lat: 13.05,
        lng: 80.25,
        image: format!("{id}.jpg"),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        place("a", true, 1, 4.5, &["cafe"]),
        place("b", false, 3, 3.0, &["grill"]),
        place("c", true, 2, 4.0, &["bakery", "cafe"]),
    ])
    .unwrap()
}

fn setup() -> ScoutApp<MemoryStore, FakeSurface, FakeMap> {
    ScoutApp::new(
        catalog(),
        ScoutConfig::default(),
        MemoryStore::new(),
        FakeSurface::default(),
        FakeMap::default(),
    )
    .unwrap()
}

fn schedule_ticket(effect: Option<Effect>) -> scout::debounce::DebounceTicket {
    match effect {
        Some(Effect::Schedule { ticket, .. }) => ticket,
        other => panic!("Expected Schedule effect, got {other:?}"),
    }
}

#[test]
fn boot_shows_full_catalog_and_all_markers() {
    let app = setup();
    assert_eq!(app.visible().len(), 3);
    assert_eq!(app.map().marker_count(), 3);
    assert!(app.surface().favorites.contains("No favorites yet"));
}

#[test]
fn search_flows_through_the_debounce_timer() {
    let mut app = setup();
    let ticket = schedule_ticket(app.dispatch(Event::QueryInput("grill".into())).unwrap());

    // Until the timer fires the grid is untouched.
    assert_eq!(app.visible().len(), 3);

    app.dispatch(Event::DebounceFired(ticket)).unwrap();
    assert_eq!(app.visible(), &[PlaceId::from("b")]);
    assert!(app.surface().grid.contains("data-id=\"b\""));
    assert!(!app.surface().grid.contains("data-id=\"a\""));
}

#[test]
fn rapid_keystrokes_apply_only_the_final_query() {
    let mut app = setup();
    let t1 = schedule_ticket(app.dispatch(Event::QueryInput("b".into())).unwrap());
    let t2 = schedule_ticket(app.dispatch(Event::QueryInput("ba".into())).unwrap());
    let t3 = schedule_ticket(app.dispatch(Event::QueryInput("bakery".into())).unwrap());

    app.dispatch(Event::DebounceFired(t1)).unwrap();
    app.dispatch(Event::DebounceFired(t2)).unwrap();
    assert_eq!(app.filter().query, "");

    app.dispatch(Event::DebounceFired(t3)).unwrap();
    assert_eq!(app.filter().query, "bakery");
    assert_eq!(app.visible(), &[PlaceId::from("c")]);
}

#[test]
fn filters_stack_and_reset_restores_everything() {
    let mut app = setup();
    app.dispatch(Event::DietChanged(DietChoice::Veg)).unwrap();
    app.dispatch(Event::MinRatingChanged(4.2)).unwrap();
    assert_eq!(app.visible(), &[PlaceId::from("a")]);

    app.dispatch(Event::ResetFilters).unwrap();
    assert_eq!(app.visible().len(), 3);
}

#[test]
fn favorites_survive_a_restart_through_the_same_store() {
    let dir = tempfile::TempDir::new().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut app = ScoutApp::new(
            catalog(),
            ScoutConfig::default(),
            store,
            FakeSurface::default(),
            FakeMap::default(),
        )
        .unwrap();
        app.dispatch(Event::ToggleFavorite("a".into())).unwrap();
        app.dispatch(Event::ToggleFavorite("c".into())).unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(
        store.get(FAVORITES_KEY).unwrap().as_deref(),
        Some(r#"["c","a"]"#)
    );

    let app = ScoutApp::new(
        catalog(),
        ScoutConfig::default(),
        store,
        FakeSurface::default(),
        FakeMap::default(),
    )
    .unwrap();
    assert_eq!(
        app.favorites().ids(),
        &[PlaceId::from("c"), PlaceId::from("a")]
    );
    // Most recent favorite renders first.
    let favs = &app.surface().favorites;
    assert!(favs.find("data-id=\"c\"").unwrap() < favs.find("data-id=\"a\"").unwrap());
}

#[test]
fn toggling_twice_restores_the_persisted_list() {
    let mut app = setup();
    app.dispatch(Event::ToggleFavorite("a".into())).unwrap();
    let persisted = app.store().get(FAVORITES_KEY).unwrap();

    app.dispatch(Event::ToggleFavorite("b".into())).unwrap();
    app.dispatch(Event::ToggleFavorite("b".into())).unwrap();

    assert_eq!(app.store().get(FAVORITES_KEY).unwrap(), persisted);
}

#[test]
fn clearing_favorites_is_gated_and_persists_an_empty_list() {
    let mut app = setup();
    app.dispatch(Event::ToggleFavorite("a".into())).unwrap();
    app.dispatch(Event::ToggleFavorite("b".into())).unwrap();

    let effect = app.dispatch(Event::ClearFavoritesRequested).unwrap();
    assert_eq!(effect, Some(Effect::ConfirmClearFavorites));
    assert_eq!(app.favorites().len(), 2, "not cleared before confirmation");

    app.dispatch(Event::ClearFavoritesConfirmed).unwrap();
    assert!(app.favorites().is_empty());
    assert_eq!(
        app.store().get(FAVORITES_KEY).unwrap().as_deref(),
        Some("[]")
    );
    assert!(app.surface().favorites.contains("No favorites yet"));
}

#[test]
fn selection_syncs_all_three_views() {
    let mut app = setup();
    app.dispatch(Event::CardClicked("c".into())).unwrap();

    assert_eq!(app.surface().highlighted, Some(PlaceId::from("c")));
    assert_eq!(app.surface().scrolled_to, Some(PlaceId::from("c")));
    let config = ScoutConfig::default();
    let (_, _, zoom, duration) = *app.map().surface().fly_tos.last().unwrap();
    assert_eq!(zoom, config.focus_zoom);
    assert_eq!(duration, config.focus_duration_ms);
    assert_eq!(app.map().surface().popups.len(), 1);
}

#[test]
fn marker_click_on_a_filtered_out_place_degrades_gracefully() {
    let mut app = setup();
    app.dispatch(Event::DietChanged(DietChoice::Veg)).unwrap();
    assert!(!app.visible().contains(&PlaceId::from("b")));

    app.dispatch(Event::MarkerClicked("b".into())).unwrap();

    // Map focus still happened; highlight and scroll did not.
    assert_eq!(app.map().surface().fly_tos.len(), 1);
    assert_eq!(app.surface().highlighted, None);
    assert_eq!(app.surface().scrolled_to, None);
}

#[test]
fn favorites_list_click_selects_like_a_card_click() {
    let mut app = setup();
    app.dispatch(Event::ToggleFavorite("b".into())).unwrap();
    app.dispatch(Event::FavoriteClicked("b".into())).unwrap();

    assert_eq!(app.surface().highlighted, Some(PlaceId::from("b")));
    assert_eq!(app.map().surface().popups.len(), 1);
}

#[test]
fn filtering_never_touches_the_marker_set() {
    let mut app = setup();
    assert_eq!(app.map().marker_count(), 3);

    app.dispatch(Event::DietChanged(DietChoice::NonVeg)).unwrap();
    let ticket = schedule_ticket(app.dispatch(Event::QueryInput("nothing".into())).unwrap());
    app.dispatch(Event::DebounceFired(ticket)).unwrap();

    assert!(app.visible().is_empty());
    assert_eq!(app.map().marker_count(), 3);
    assert_eq!(app.map().surface().markers.len(), 3);
}
