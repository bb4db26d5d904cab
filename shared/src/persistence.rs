use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::*;
use crate::draw_model::CategoryConfig;
use crate::drawn_store::DrawnSet;
use crate::error::CoreResult;
use crate::tuning::DrawTuning;

/// String key/value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&self, key: &str) -> CoreResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and saves the draw records as JSON under fixed keys.
pub struct DrawRepository<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> DrawRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load_config(&self) -> Vec<CategoryConfig> {
        self.load(STORAGE_KEY_CONFIG).unwrap_or_default()
    }

    pub fn save_config(&self, config: &[CategoryConfig]) -> CoreResult<()> {
        self.save(STORAGE_KEY_CONFIG, config)
    }

    pub fn load_drawn(&self) -> DrawnSet {
        self.load(STORAGE_KEY_DRAWN).unwrap_or_default()
    }

    pub fn save_drawn(&self, drawn: &DrawnSet) -> CoreResult<()> {
        self.save(STORAGE_KEY_DRAWN, drawn)
    }

    /// Stored tuning override, or defaults when missing or invalid.
    pub fn load_tuning(&self) -> DrawTuning {
        let raw = match self.storage.get(STORAGE_KEY_TUNING) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DrawTuning::default(),
            Err(e) => {
                log::warn!("Failed to read tuning: {}", e);
                return DrawTuning::default();
            }
        };
        DrawTuning::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring stored tuning: {}", e);
            DrawTuning::default()
        })
    }

    /// Forgets the configuration and every drawn combination.
    pub fn reset(&self) -> CoreResult<()> {
        self.storage.remove(STORAGE_KEY_CONFIG)?;
        self.storage.remove(STORAGE_KEY_DRAWN)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                log::error!("Failed to read \"{}\": {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Failed to parse stored key \"{}\": {}", key, e);
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> CoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawn_store::DrawnStore;

    fn repository() -> DrawRepository<MemoryStorage> {
        DrawRepository::new(MemoryStorage::new())
    }

    #[test]
    fn test_missing_records_load_empty() {
        let repo = repository();
        assert!(repo.load_config().is_empty());
        assert!(repo.load_drawn().is_empty());
        assert_eq!(repo.load_tuning(), DrawTuning::default());
    }

    #[test]
    fn test_records_restore_verbatim() {
        let repo = repository();
        let config = vec![CategoryConfig::new("A", ["1", "2"]), CategoryConfig::new("B", ["9"])];
        let mut drawn = DrawnSet::new();
        drawn.add("B9".to_string());
        drawn.add("A2".to_string());
        repo.save_config(&config).unwrap();
        repo.save_drawn(&drawn).unwrap();

        assert_eq!(repo.load_config(), config);
        assert_eq!(repo.load_drawn(), drawn);
        assert_eq!(
            repo.storage().get(STORAGE_KEY_DRAWN).unwrap().as_deref(),
            Some(r#"["B9","A2"]"#)
        );
    }

    #[test]
    fn test_corrupt_record_is_treated_as_absent() {
        let repo = repository();
        repo.storage().set(STORAGE_KEY_CONFIG, "{not json").unwrap();
        assert!(repo.load_config().is_empty());
    }

    #[test]
    fn test_reset_removes_config_and_drawn() {
        let repo = repository();
        repo.save_config(&[CategoryConfig::new("A", ["1"])]).unwrap();
        repo.save_drawn(&DrawnSet::from_keys(["A1"])).unwrap();
        repo.reset().unwrap();
        assert!(repo.load_config().is_empty());
        assert!(repo.load_drawn().is_empty());
    }

    #[test]
    fn test_stored_tuning_override() {
        let repo = repository();
        repo.storage()
            .set(STORAGE_KEY_TUNING, r#"{"charge": {"tap_threshold": 10}}"#)
            .unwrap();
        assert_eq!(repo.load_tuning().charge.tap_threshold, 10.0);
        repo.storage().set(STORAGE_KEY_TUNING, r#"{"wheel": {"decay_per_frame": 2}}"#).unwrap();
        assert_eq!(repo.load_tuning(), DrawTuning::default());
    }
}
