//! # Persistence Layer
//!
//! This module defines the persistence abstraction for scout. The [`KvStore`]
//! trait wraps whatever key-value surface the host provides (browser local
//! storage, a file, a test map) behind get/set-string-by-key.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with [`memory::MemoryStore`] (no filesystem needed)
//! - Let hosts bring **their own backend** (a browser shim, a database)
//!   without changing core logic
//! - Keep the favorites logic **decoupled** from where bytes live
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: file-based storage, all keys in one `data.json`
//! - [`memory::MemoryStore`]: in-memory storage for testing
//!
//! ## Defensive reads
//!
//! Callers of this layer (the favorites set in particular) treat a missing
//! key and an unparsable value the same way: an empty default, logged, never
//! an error surfaced to the user. `FileStore` applies the same policy to a
//! corrupt `data.json`.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Storage key for the serialized favorites id list.
pub const FAVORITES_KEY: &str = "scout:favs";

/// Abstract interface over a string key-value surface.
pub trait KvStore {
    /// Read the value under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present.
    fn remove(&mut self, key: &str) -> Result<()>;
}
