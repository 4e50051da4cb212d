//! # Favorites
//!
//! [`FavoritesSet`] is the ordered list of favorited place ids,
//! most-recently-added first, deduplicated by construction: toggling an id
//! that is already present removes it instead of duplicating it.
//!
//! The set persists as a JSON list of ids (`["p3","p1"]`) under a single
//! storage key. Loading is defensive: a missing key, unparsable JSON, or a
//! value of the wrong shape all yield an empty set and a log line, never an
//! error. Saving happens synchronously after every mutation; the app layer
//! owns that discipline.

use log::warn;

use crate::error::Result;
use crate::model::PlaceId;
use crate::store::KvStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: Vec<PlaceId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `store` under `key`; any failure degrades to an empty set.
    pub fn load<K: KvStore>(store: &K, key: &str) -> Self {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                warn!("event=favorites_load key={key} err={err} recovery=empty");
                return Self::new();
            }
        };
        match serde_json::from_str::<Vec<PlaceId>>(&raw) {
            Ok(ids) => Self { ids },
            Err(err) => {
                warn!("event=favorites_parse key={key} err={err} recovery=empty");
                Self::new()
            }
        }
    }

    /// Serialize the ordered id list to `store` under `key`.
    pub fn save<K: KvStore>(&self, store: &mut K, key: &str) -> Result<()> {
        let serialized = serde_json::to_string(&self.ids)?;
        store.set(key, &serialized)
    }

    pub fn is_favorite(&self, id: &PlaceId) -> bool {
        self.ids.contains(id)
    }

    /// Remove `id` if present, else prepend it as the most recent favorite.
    /// Returns whether `id` is a favorite after the toggle.
    pub fn toggle(&mut self, id: PlaceId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.insert(0, id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Ids in stored order, most recent first.
    pub fn ids(&self) -> &[PlaceId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaceId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
