//! State store: a durable string → string mapping.
//!
//! The tracker only ever talks to a [`KeyValueStore`]; there are no
//! transactions and no atomicity across keys.

pub mod keys;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

pub trait KeyValueStore {
    /// Read the raw value stored under `key`, `None` when the key was never set.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Insert or replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}
