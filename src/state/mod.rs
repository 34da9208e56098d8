mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, SETTINGS_KEY, SettingsStorage};
pub use store::SettingsStore;
