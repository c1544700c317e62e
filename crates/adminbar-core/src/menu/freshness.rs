//! Soft/hard window evaluation of a cached menu snapshot

use std::time::Duration;

use adminbar_shared::{age_since, Timestamp};

use crate::domain::{Freshness, MenuCache, MenuEntries, MenuLookup};

/// Decide what a reader gets from `cache` at `now`.
///
/// Inside the soft window the snapshot is served as is. Between the soft and
/// the hard window it is still served but flagged for rebuild. Past the hard
/// window, or when nothing was cached, readers get an empty mapping.
pub fn get_menu(
    cache: Option<&MenuCache>,
    now: Timestamp,
    soft_window: Duration,
    hard_window: Duration,
) -> MenuLookup {
    let Some(cache) = cache else {
        return MenuLookup {
            entries: MenuEntries::new(),
            freshness: Freshness::Missing,
        };
    };

    let age = age_since(cache.captured_at, now);
    let freshness = if age >= hard_window {
        Freshness::Expired
    } else if age >= soft_window {
        Freshness::Stale
    } else {
        Freshness::Fresh
    };

    let entries = match freshness {
        Freshness::Fresh | Freshness::Stale => cache.entries.clone(),
        Freshness::Expired | Freshness::Missing => MenuEntries::new(),
    };

    MenuLookup { entries, freshness }
}
