// ============================================================================
// Admin Bar Core - Menu Cache Builder
// File: crates/adminbar-core/src/menu/builder.rs
// Description: Turns the raw navigation registry into a cleaned two-level tree
// ============================================================================
//! Menu cache builder
//!
//! Building never consults permissions: the snapshot is shared by every
//! administrator, so entries the current user cannot see are still stored
//! and filtered at render time.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use adminbar_shared::config::AppConfig;
use adminbar_shared::constants::{ADMIN_PAGE_FILE, PAGE_FILE_MARKER, POST_LISTING_FILE};
use adminbar_shared::utils::is_absolute_url;
use adminbar_shared::Timestamp;

use crate::domain::{MenuCache, MenuEntries, MenuEntry, RawMenuItem};
use crate::menu::markup::clean_title;

/// Inputs to the build besides the registry itself
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub admin_base_url: String,
    pub deny_list: HashSet<String>,
    /// Post types whose listing screens are surfaced by the content group
    pub handled_post_types: HashSet<String>,
}

impl BuildOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            admin_base_url: config.admin.base_url.clone(),
            deny_list: config.menu.deny_list.iter().cloned().collect(),
            handled_post_types: config.menu.handled_post_types.iter().cloned().collect(),
        }
    }

    pub fn with_handled_post_types<I, S>(mut self, post_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handled_post_types
            .extend(post_types.into_iter().map(Into::into));
        self
    }

    fn is_denied(&self, title: &str) -> bool {
        title.is_empty() || self.deny_list.contains(title)
    }

    fn is_handled_listing(&self, path: &str) -> bool {
        listed_post_type(path).is_some_and(|pt| self.handled_post_types.contains(pt))
    }

    fn admin_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.admin_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

fn has_page_file(path: &str) -> bool {
    path.contains(PAGE_FILE_MARKER)
}

fn with_page_param(target: &str, page: &str) -> String {
    let sep = if target.contains('?') { '&' } else { '?' };
    format!("{target}{sep}page={page}")
}

/// Post type listed by an `edit.php?post_type=X` path
pub fn listed_post_type(path: &str) -> Option<&str> {
    let (file, query) = path.split_once('?')?;
    if file.rsplit('/').next() != Some(POST_LISTING_FILE) {
        return None;
    }
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "post_type")
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

/// Absolute link of a top-level item. Paths without a page file are
/// registered page slugs served through `admin.php`.
fn top_level_href(options: &BuildOptions, path: &str) -> String {
    if has_page_file(path) || is_absolute_url(path) {
        options.admin_url(path)
    } else {
        options.admin_url(&with_page_param(ADMIN_PAGE_FILE, path))
    }
}

fn child_href(options: &BuildOptions, parent_path: &str, child_path: &str) -> String {
    if has_page_file(child_path) || is_absolute_url(child_path) {
        options.admin_url(child_path)
    } else if has_page_file(parent_path) {
        options.admin_url(&with_page_param(parent_path, child_path))
    } else {
        options.admin_url(&with_page_param(ADMIN_PAGE_FILE, child_path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    TopLevel,
    Submenu,
}

/// Cleaned title and path of a raw item, or `None` if it must be skipped.
/// The deny-list names top-level screens surfaced elsewhere; submenu pages
/// with the same label (Settings > Media) are only dropped when empty.
fn accept<'a>(
    options: &BuildOptions,
    item: &'a RawMenuItem,
    level: Level,
) -> Option<(String, &'a str)> {
    let (Some(raw_title), Some(path)) = (item.title.as_deref(), item.path()) else {
        debug!("Skipping malformed menu item: {:?}", item);
        return None;
    };
    let title = clean_title(raw_title);
    let rejected = match level {
        Level::TopLevel => options.is_denied(&title),
        Level::Submenu => title.is_empty(),
    };
    if rejected {
        debug!("Skipping menu item {:?} (title {:?} is empty or denied)", path, title);
        return None;
    }
    Some((title, path))
}

fn build_children(
    options: &BuildOptions,
    parent_path: &str,
    raw_children: &[RawMenuItem],
) -> MenuEntries {
    let mut children = MenuEntries::new();
    for item in raw_children {
        let Some((title, path)) = accept(options, item, Level::Submenu) else {
            continue;
        };
        let entry = MenuEntry::new(
            path,
            &title,
            &child_href(options, parent_path, path),
            item.capability(),
        );
        if !children.insert(entry) {
            debug!("Duplicate submenu key {:?} under {:?}, keeping first", path, parent_path);
        }
    }
    children
}

/// Build a complete settings-menu snapshot from the raw registry.
///
/// `raw_children_by_parent` is keyed by the raw (uncleaned) path of the
/// top-level item. Malformed or filtered items are skipped one by one.
pub fn build_menu_cache(
    raw_top_level: &[RawMenuItem],
    raw_children_by_parent: &HashMap<String, Vec<RawMenuItem>>,
    options: &BuildOptions,
    now: Timestamp,
) -> MenuCache {
    let mut entries = MenuEntries::new();

    for item in raw_top_level {
        let Some((title, path)) = accept(options, item, Level::TopLevel) else {
            continue;
        };
        if options.is_handled_listing(path) {
            debug!("Skipping {:?}: post type listing already surfaced", path);
            continue;
        }

        let mut entry = MenuEntry::new(
            path,
            &title,
            &top_level_href(options, path),
            item.capability(),
        );
        if let Some(raw_children) = raw_children_by_parent.get(path) {
            entry.children = build_children(options, path, raw_children);
        }

        if !entries.insert(entry) {
            debug!("Duplicate menu key {:?}, keeping first", path);
        }
    }

    MenuCache {
        captured_at: now,
        entries,
    }
}
