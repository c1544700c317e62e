//! Time-stamped menu snapshot and the result of reading it

use serde::{Deserialize, Serialize};

use adminbar_shared::Timestamp;

use super::menu_entry::MenuEntries;

/// Complete settings-menu snapshot. Always written as a whole, under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCache {
    pub captured_at: Timestamp,
    pub entries: MenuEntries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Inside the soft window
    Fresh,
    /// Past the soft window, still served
    Stale,
    /// Past the hard window, treated as absent
    Expired,
    Missing,
}

impl Freshness {
    pub fn needs_rebuild(&self) -> bool {
        !matches!(self, Freshness::Fresh)
    }
}

/// What a reader gets back: the entries to render, and whether a
/// privileged caller should rebuild the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLookup {
    pub entries: MenuEntries,
    pub freshness: Freshness,
}

impl MenuLookup {
    pub fn needs_rebuild(&self) -> bool {
        self.freshness.needs_rebuild()
    }
}
