use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Fixed key of the single settings slot.
pub const SETTINGS_KEY: &str = "nutritionGeneratorSettings";

/// Directory name under the platform config dir.
const APP_DIR: &str = "nutrition-table";

/// A single persistent key-value slot holding serialized settings.
pub trait SettingsStorage {
    /// Raw slot contents, or `None` if nothing has been saved.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the slot contents in one write.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Remove the slot. Clearing an empty slot is not an error.
    fn clear(&mut self) -> Result<()>;
}

/// Slot backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/nutrition-table/nutritionGeneratorSettings.json`, or the
    /// working directory when the platform has no config dir.
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(format!("{}.json", SETTINGS_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStorage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write beside the target and rename so readers never see a partial file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory slot, used in tests and as a stand-in when no disk is wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot with raw contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.slot = Some(contents.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_missing_slot() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("settings.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_write_read_clear() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested").join("settings.json"));

        storage.write("{\"a\":1}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"a\":1}"));
        assert!(!storage.path().with_extension("json.tmp").exists());

        storage.write("{\"a\":2}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"a\":2}"));

        storage.clear().unwrap();
        assert!(storage.read().unwrap().is_none());
        // Second clear is a no-op
        storage.clear().unwrap();
    }

    #[test]
    fn test_default_location_uses_key() {
        let storage = FileStorage::default_location();
        assert!(storage.path().ends_with(format!("{}.json", SETTINGS_KEY)));
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::with_contents("x");
        assert_eq!(storage.read().unwrap().as_deref(), Some("x"));
        storage.clear().unwrap();
        assert!(storage.contents().is_none());
    }
}
