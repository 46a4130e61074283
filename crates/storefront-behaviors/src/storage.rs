//! Preference Storage
//!
//! Key-value store for the persisted theme preference.

/// Key under which the theme preference is stored
pub const THEME_KEY: &str = "theme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Best-effort write; a store that cannot persist simply forgets
    fn set(&self, key: &str, value: &str);
}

#[cfg(test)]
pub use memory::MemoryStore;
