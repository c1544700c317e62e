// ============================================================================
// Admin Bar Core - Settings Menu Service
// File: crates/adminbar-core/src/services/settings_menu_service.rs
// ============================================================================
//! Serve-stale-while-revalidate access to the cached settings menu

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use adminbar_shared::config::AppConfig;
use adminbar_shared::Timestamp;

use crate::domain::{MenuCache, MenuEntries, RawMenuItem};
use crate::error::DomainError;
use crate::menu::{build_menu_cache, get_menu, BuildOptions};
use crate::repositories::{CacheStore, NavigationRegistry, PermissionOracle};

/// Reads the shared settings-menu snapshot and rebuilds it for privileged callers
pub struct SettingsMenuService<C: CacheStore> {
    store: Arc<C>,
    options: BuildOptions,
    cache_key: String,
    soft_window: Duration,
    hard_window: Duration,
    privileged_capability: String,
}

impl<C: CacheStore> SettingsMenuService<C> {
    pub fn new(store: Arc<C>, config: &AppConfig) -> Self {
        Self {
            store,
            options: BuildOptions::from_config(config),
            cache_key: config.cache.settings_menu_key.clone(),
            soft_window: config.cache.soft_window(),
            hard_window: config.cache.hard_window(),
            privileged_capability: config.menu.privileged_capability.clone(),
        }
    }

    /// Replace the build options, e.g. to add the post types surfaced elsewhere
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Entries to render for the current request.
    ///
    /// Never fails: unreadable snapshots count as missing, and a failed
    /// store write still returns the freshly built entries.
    pub async fn menu<R, P>(&self, registry: &R, permissions: &P, now: Timestamp) -> MenuEntries
    where
        R: NavigationRegistry + ?Sized,
        P: PermissionOracle + ?Sized,
    {
        let snapshot = self.load_snapshot().await;
        let lookup = get_menu(snapshot.as_ref(), now, self.soft_window, self.hard_window);

        if !lookup.needs_rebuild() {
            debug!("Serving fresh settings menu ({} entries)", lookup.entries.len());
            return lookup.entries;
        }

        if !permissions.can(&self.privileged_capability) {
            debug!(
                "Settings menu is {:?}, caller lacks {}; serving last snapshot",
                lookup.freshness, self.privileged_capability
            );
            return lookup.entries;
        }

        info!("Rebuilding settings menu cache (snapshot {:?})", lookup.freshness);
        self.refresh(registry, now).await.entries
    }

    /// Rebuild from the live registry and store the snapshot, unconditionally
    pub async fn refresh<R>(&self, registry: &R, now: Timestamp) -> MenuCache
    where
        R: NavigationRegistry + ?Sized,
    {
        let top_level = registry.top_level();
        let children = collect_children(registry, &top_level);
        let cache = build_menu_cache(&top_level, &children, &self.options, now);

        match self.store_snapshot(&cache).await {
            Ok(()) => info!(
                "Stored settings menu snapshot: {} entries under {}",
                cache.entries.len(),
                self.cache_key
            ),
            Err(e) => warn!("Failed to store settings menu snapshot: {}", e),
        }

        cache
    }

    pub async fn invalidate(&self) -> bool {
        match self.store.delete(&self.cache_key).await {
            Ok(removed) => removed,
            Err(e) => {
                warn!("Failed to invalidate settings menu cache: {}", e);
                false
            }
        }
    }

    async fn load_snapshot(&self) -> Option<MenuCache> {
        let raw = match self.store.get(&self.cache_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read settings menu cache: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!("Discarding undecodable settings menu snapshot: {}", e);
                None
            }
        }
    }

    async fn store_snapshot(&self, cache: &MenuCache) -> Result<(), DomainError> {
        let raw = serde_json::to_string(cache)?;
        self.store.set(&self.cache_key, raw, self.hard_window).await
    }
}

fn collect_children<R>(registry: &R, top_level: &[RawMenuItem]) -> HashMap<String, Vec<RawMenuItem>>
where
    R: NavigationRegistry + ?Sized,
{
    let mut children = HashMap::new();
    for path in top_level.iter().filter_map(RawMenuItem::path) {
        if children.contains_key(path) {
            continue;
        }
        let items = registry.children_of(path);
        if !items.is_empty() {
            children.insert(path.to_string(), items);
        }
    }
    children
}
