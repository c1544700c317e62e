// ============================================================================
// Admin Bar Core - Menu Entry Entity
// File: crates/adminbar-core/src/domain/menu_entry.rs
// Description: Cleaned navigation destination and its ordered key mapping
// ============================================================================

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Menu entry after cleaning and URL resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Stable key, derived from the raw registry path
    pub key: String,
    /// Plain-text label
    pub title: String,
    /// Absolute link
    pub href: String,
    /// Required capability, empty means always visible
    #[serde(default)]
    pub capability: String,
    /// Sub-pages, one level deep
    #[serde(default)]
    pub children: MenuEntries,
}

impl MenuEntry {
    pub fn new(key: &str, title: &str, href: &str, capability: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            href: href.to_string(),
            capability: capability.to_string(),
            children: MenuEntries::new(),
        }
    }

    pub fn is_visible_with<F>(&self, can: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        self.capability.is_empty() || can(&self.capability)
    }
}

/// Ordered `key -> MenuEntry` mapping. Keeps registry order and rejects
/// duplicate keys, so the first entry registered under a key wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuEntries(Vec<MenuEntry>);

impl MenuEntries {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns false (and drops `entry`) when the key is already taken
    pub fn insert(&mut self, entry: MenuEntry) -> bool {
        if self.contains_key(&entry.key) {
            return false;
        }
        self.0.push(entry);
        true
    }

    pub fn get(&self, key: &str) -> Option<&MenuEntry> {
        self.0.iter().find(|e| e.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<&str> for MenuEntries {
    type Output = MenuEntry;

    fn index(&self, key: &str) -> &MenuEntry {
        self.get(key)
            .unwrap_or_else(|| panic!("no menu entry for key {key:?}"))
    }
}

impl<'a> IntoIterator for &'a MenuEntries {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MenuEntries {
    type Item = MenuEntry;
    type IntoIter = std::vec::IntoIter<MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
