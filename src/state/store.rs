use crate::error::Result;
use crate::models::Settings;
use crate::state::storage::SettingsStorage;

/// Loads and saves [`Settings`] through a single storage slot.
pub struct SettingsStore<S: SettingsStorage> {
    storage: S,
}

impl<S: SettingsStorage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load persisted settings.
    ///
    /// Missing, unreadable or corrupt data yields the defaults. The slot is
    /// left as-is; only [`reset`](Self::reset) clears it.
    pub fn load(&self) -> Settings {
        let content = match self.storage.read() {
            Ok(Some(content)) => content,
            Ok(None) => return Settings::default(),
            Err(e) => {
                log::warn!("could not read saved settings, using defaults: {}", e);
                return Settings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("saved settings are malformed, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Persist the full settings object in one write.
    pub fn save(&mut self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.storage.write(&json)?;
        log::debug!("settings saved");
        Ok(())
    }

    /// Clear the persisted slot and return the defaults.
    pub fn reset(&mut self) -> Result<Settings> {
        self.storage.clear()?;
        log::info!("settings reset to defaults");
        Ok(Settings::default())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionValues;
    use crate::state::storage::MemoryStorage;

    fn custom_settings() -> Settings {
        Settings {
            day_count: 3,
            targets: NutritionValues::new(1800.5, 140.0, 200.0, 60.0),
            error_margins: NutritionValues::new(50.0, 0.0, 12.5, 2.0),
        }
    }

    #[test]
    fn test_load_without_save_returns_defaults() {
        let store = SettingsStore::new(MemoryStorage::new());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = SettingsStore::new(MemoryStorage::new());
        store.save(&custom_settings()).unwrap();
        assert_eq!(store.load(), custom_settings());
    }

    #[test]
    fn test_malformed_slot_falls_back_and_is_kept() {
        let store = SettingsStore::new(MemoryStorage::with_contents("not json {"));
        assert_eq!(store.load(), Settings::default());
        assert_eq!(store.storage().contents(), Some("not json {"));
    }

    #[test]
    fn test_missing_field_falls_back() {
        let store = SettingsStore::new(MemoryStorage::with_contents(r#"{"savedNumDays": 3}"#));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_negative_day_count_falls_back() {
        let json = r#"{
            "savedNumDays": -2,
            "savedTargets": {"calories": 1, "protein": 1, "carbs": 1, "fat": 1},
            "savedErrors": {"calories": 0, "protein": 0, "carbs": 0, "fat": 0}
        }"#;
        let store = SettingsStore::new(MemoryStorage::with_contents(json));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_reset_clears_slot() {
        let mut store = SettingsStore::new(MemoryStorage::new());
        store.save(&custom_settings()).unwrap();

        let settings = store.reset().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(store.storage().contents().is_none());
        assert_eq!(store.load(), Settings::default());
    }
}
