use shared::error::{CoreResult, DrawError};
use shared::persistence::{DrawRepository, KeyValueStorage};
use web_sys::{window, Storage};

/// `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle(&self) -> CoreResult<Storage> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| DrawError::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.handle()?
            .get_item(key)
            .map_err(|e| DrawError::Storage(format!("reading {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| DrawError::Storage(format!("writing {}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.handle()?
            .remove_item(key)
            .map_err(|e| DrawError::Storage(format!("removing {}: {:?}", key, e)))
    }
}

pub fn repository() -> DrawRepository<LocalStorage> {
    DrawRepository::new(LocalStorage)
}
