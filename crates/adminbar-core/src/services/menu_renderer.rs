//! Writes the cached settings menu into the host menu tree

use std::collections::HashSet;

use tracing::debug;

use adminbar_shared::constants::SETTINGS_NODE_PREFIX;
use adminbar_shared::utils::node_slug;

use crate::domain::MenuEntries;
use crate::repositories::{MenuTreeSink, PermissionOracle};

/// Joins a child slug to its parent's node id. `node_slug` never emits two
/// dashes in a row, so a child id cannot equal any top-level id.
const CHILD_SEPARATOR: &str = "--";

/// Node ids handed out during one render. Slugs drop punctuation, so two
/// keys can share a slug; later claimants get a `_2`, `_3`, ... suffix,
/// which `node_slug` never produces either.
#[derive(Default)]
struct NodeIds {
    claimed: HashSet<String>,
}

impl NodeIds {
    fn claim(&mut self, base: String) -> String {
        if self.claimed.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", base, n);
            if self.claimed.insert(candidate.clone()) {
                debug!("Node id {} already used, rendering as {}", base, candidate);
                return candidate;
            }
            n += 1;
        }
    }
}

fn slug_or_placeholder(key: &str) -> String {
    let slug = node_slug(key);
    if slug.is_empty() {
        "entry".to_string()
    } else {
        slug
    }
}

/// Add every entry the current user may see under `parent_id`.
/// Capabilities are checked here, not at build time. Every node gets a
/// distinct id, so no entry replaces another in the sink. Returns the number
/// of top-level nodes added.
pub fn render_settings_menu<S, P>(
    sink: &mut S,
    parent_id: &str,
    entries: &MenuEntries,
    permissions: &P,
) -> usize
where
    S: MenuTreeSink + ?Sized,
    P: PermissionOracle + ?Sized,
{
    let mut ids = NodeIds::default();
    let mut added = 0;

    for entry in entries {
        if !entry.is_visible_with(|cap| permissions.can(cap)) {
            debug!("Hiding settings entry {:?}: missing {}", entry.key, entry.capability);
            continue;
        }

        let node_id = ids.claim(format!(
            "{}-{}",
            SETTINGS_NODE_PREFIX,
            slug_or_placeholder(&entry.key)
        ));
        sink.add(parent_id, &node_id, &entry.title, &entry.href);
        added += 1;

        for child in &entry.children {
            if !child.is_visible_with(|cap| permissions.can(cap)) {
                continue;
            }
            let child_id = ids.claim(format!(
                "{}{}{}",
                node_id,
                CHILD_SEPARATOR,
                slug_or_placeholder(&child.key)
            ));
            sink.add(&node_id, &child_id, &child.title, &child.href);
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuEntry, MenuNode};
    use crate::repositories::MockPermissionOracle;

    #[derive(Default)]
    struct RecordingTree {
        nodes: Vec<MenuNode>,
    }

    impl MenuTreeSink for RecordingTree {
        fn add(&mut self, parent_id: &str, id: &str, title: &str, href: &str) {
            self.nodes.push(MenuNode::new(parent_id, id, title, href));
        }

        fn remove(&mut self, id: &str) -> bool {
            let before = self.nodes.len();
            self.nodes.retain(|n| n.id != id);
            before != self.nodes.len()
        }

        fn get(&self, id: &str) -> Option<MenuNode> {
            self.nodes.iter().find(|n| n.id == id).cloned()
        }
    }

    fn entries() -> MenuEntries {
        let mut settings = MenuEntry::new(
            "options-general.php",
            "Settings",
            "https://example.com/wp-admin/options-general.php",
            "manage_options",
        );
        settings.children.insert(MenuEntry::new(
            "options-reading.php",
            "Reading",
            "https://example.com/wp-admin/options-reading.php",
            "manage_options",
        ));
        settings.children.insert(MenuEntry::new(
            "smtp",
            "SMTP",
            "https://example.com/wp-admin/options-general.php?page=smtp",
            "manage_smtp",
        ));

        let mut entries = MenuEntries::new();
        entries.insert(settings);
        entries.insert(MenuEntry::new("shop", "Shop", "https://example.com/wp-admin/admin.php?page=shop", "manage_shop"));
        entries.insert(MenuEntry::new("help", "Help", "https://example.com/wp-admin/admin.php?page=help", ""));
        entries
    }

    #[test]
    fn test_renders_only_permitted_nodes() {
        let mut oracle = MockPermissionOracle::new();
        oracle
            .expect_can()
            .returning(|cap| cap == "manage_options");

        let mut tree = RecordingTree::default();
        let added = render_settings_menu(&mut tree, "rs-manage-site", &entries(), &oracle);

        assert_eq!(added, 2);
        let ids = tree.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "rs-settings-options-general-php",
                "rs-settings-options-general-php--options-reading-php",
                "rs-settings-help",
            ]
        );
        let reading = tree.get("rs-settings-options-general-php--options-reading-php").unwrap();
        assert_eq!(reading.parent_id.as_deref(), Some("rs-settings-options-general-php"));
        assert!(tree.get("rs-settings-shop").is_none());
    }

    fn allow_all() -> MockPermissionOracle {
        let mut oracle = MockPermissionOracle::new();
        oracle.expect_can().return_const(true);
        oracle
    }

    #[test]
    fn test_child_id_never_matches_top_level_id() {
        let mut shop = MenuEntry::new("woocommerce", "WooCommerce", "https://example.com/wp-admin/admin.php?page=woocommerce", "");
        shop.children.insert(MenuEntry::new(
            "marketing",
            "Marketing Hub",
            "https://example.com/wp-admin/admin.php?page=marketing",
            "",
        ));
        let mut entries = MenuEntries::new();
        entries.insert(shop);
        entries.insert(MenuEntry::new(
            "woocommerce-marketing",
            "Marketing",
            "https://example.com/wp-admin/admin.php?page=woocommerce-marketing",
            "",
        ));

        let mut tree = RecordingTree::default();
        let added = render_settings_menu(&mut tree, "rs-manage-site", &entries, &allow_all());

        assert_eq!(added, 2);
        let ids = tree.nodes.iter().map(|n| n.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 3);

        let hub = tree.get("rs-settings-woocommerce--marketing").unwrap();
        assert_eq!(hub.title, "Marketing Hub");
        assert_eq!(hub.parent_id.as_deref(), Some("rs-settings-woocommerce"));
        let marketing = tree.get("rs-settings-woocommerce-marketing").unwrap();
        assert_eq!(marketing.title, "Marketing");
        assert_eq!(marketing.parent_id.as_deref(), Some("rs-manage-site"));
    }

    #[test]
    fn test_keys_with_same_slug_get_distinct_ids() {
        let mut entries = MenuEntries::new();
        entries.insert(MenuEntry::new("options-general.php", "Settings", "https://example.com/wp-admin/options-general.php", ""));
        entries.insert(MenuEntry::new("options_general.php", "Legacy", "https://example.com/wp-admin/options_general.php", ""));
        entries.insert(MenuEntry::new("???", "Odd", "https://example.com/wp-admin/admin.php?page=odd", ""));

        let mut tree = RecordingTree::default();
        let added = render_settings_menu(&mut tree, "rs-manage-site", &entries, &allow_all());

        assert_eq!(added, 3);
        let ids = tree.nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "rs-settings-options-general-php",
                "rs-settings-options-general-php_2",
                "rs-settings-entry",
            ]
        );
        assert_eq!(tree.get("rs-settings-options-general-php_2").unwrap().title, "Legacy");
    }

    #[test]
    fn test_nothing_rendered_for_empty_menu() {
        let mut tree = RecordingTree::default();
        let added = render_settings_menu(&mut tree, "rs-manage-site", &MenuEntries::new(), &MockPermissionOracle::new());
        assert_eq!(added, 0);
        assert!(tree.nodes.is_empty());
        assert!(!tree.remove("rs-settings-help"));
    }
}
