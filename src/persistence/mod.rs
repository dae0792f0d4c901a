//! String-keyed durable storage
//!
//! The stores never talk to a browser or filesystem directly. They write
//! through a [`Storage`] backend:
//! - [`MemoryStorage`]: in-process map (tests, headless runs)
//! - `platform::LocalStorage`: browser LocalStorage (wasm32)
//! - `platform::FileStorage`: one JSON file per key (native)

mod memory;

pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Key-value backend with LocalStorage semantics
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Read and deserialize a JSON value. `Ok(None)` when the key is absent.
pub fn load_json<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Result<Option<T>> {
    match storage.get_item(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Serialize a value to JSON and write it under `key`
pub fn save_json<T: Serialize>(storage: &mut impl Storage, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)?;
    log::debug!("Wrote {} bytes to {}", json.len(), key);
    Ok(())
}
