use crate::error::{Result, SaveDataError};
use crate::persistence::Storage;

/// Browser LocalStorage backend
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// Grab `window.localStorage`, if the browser allows it
    pub fn open() -> Result<Self> {
        let inner = web_sys::window()
            .ok_or_else(|| SaveDataError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| SaveDataError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| SaveDataError::Storage("LocalStorage unavailable".to_string()))?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| SaveDataError::Storage(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| SaveDataError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| SaveDataError::Storage(format!("{:?}", e)))
    }
}
