//! Settings menu: build, cache, serve stale, and render into the admin-bar tree

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Duration, Utc};

use adminbar_core::domain::{PostSummary, RawMenuItem};
use adminbar_core::repositories::{
    CacheStore, MenuTreeSink, NavigationRegistry, PermissionOracle, PostSource,
};
use adminbar_core::services::{render_settings_menu, PostQueryService, SettingsMenuService};
use adminbar_infrastructure::{MemoryCacheStore, MemoryMenuTree};
use adminbar_shared::config::AppConfig;

struct StaticRegistry {
    top_level: Vec<RawMenuItem>,
    children: HashMap<String, Vec<RawMenuItem>>,
}

impl NavigationRegistry for StaticRegistry {
    fn top_level(&self) -> Vec<RawMenuItem> {
        self.top_level.clone()
    }

    fn children_of(&self, parent_path: &str) -> Vec<RawMenuItem> {
        self.children.get(parent_path).cloned().unwrap_or_default()
    }
}

struct User {
    caps: HashSet<&'static str>,
}

impl PermissionOracle for User {
    fn can(&self, capability: &str) -> bool {
        self.caps.contains(capability)
    }
}

fn admin() -> User {
    User { caps: ["manage_options", "manage_woocommerce"].into_iter().collect() }
}

fn editor() -> User {
    User { caps: ["edit_posts"].into_iter().collect() }
}

fn registry(settings_title: &str) -> StaticRegistry {
    let mut children = HashMap::new();
    children.insert(
        "options-general.php".to_string(),
        vec![
            RawMenuItem::new("General", "manage_options", "options-general.php"),
            RawMenuItem::new("SMTP", "manage_options", "smtp"),
        ],
    );
    StaticRegistry {
        top_level: vec![
            RawMenuItem::new("Dashboard", "read", "index.php"),
            RawMenuItem::new("", "read", "separator1"),
            RawMenuItem::new(settings_title, "manage_options", "options-general.php"),
            RawMenuItem::new("Products", "manage_woocommerce", "edit.php?post_type=product"),
            RawMenuItem::new("Tools", "edit_posts", "tools.php"),
        ],
        children,
    }
}

fn config() -> AppConfig {
    let _ = adminbar_shared::telemetry::init_telemetry();
    let mut config = AppConfig::default();
    config.admin.base_url = "https://example.com/wp-admin/".to_string();
    config
}

#[tokio::test]
async fn test_admin_builds_and_editor_reads_shared_snapshot() {
    let store = Arc::new(MemoryCacheStore::new());
    let service = SettingsMenuService::new(store.clone(), &config());
    let now = Utc::now();

    // Nothing cached yet and editors may not rebuild
    let entries = service.menu(&registry("Settings"), &editor(), now).await;
    assert!(entries.is_empty());
    assert!(store.get("rs_admin_bar_settings_menu").await.unwrap().is_none());

    let entries = service.menu(&registry("Settings"), &admin(), now).await;
    assert_eq!(
        entries.keys().collect::<Vec<_>>(),
        vec!["options-general.php", "edit.php?post_type=product", "tools.php"]
    );
    let settings = &entries["options-general.php"];
    assert_eq!(settings.href, "https://example.com/wp-admin/options-general.php");
    assert_eq!(
        settings.children["smtp"].href,
        "https://example.com/wp-admin/options-general.php?page=smtp"
    );

    // The editor now sees the snapshot the admin built
    let shared = service.menu(&registry("Renamed"), &editor(), now).await;
    assert_eq!(shared, entries);
}

#[tokio::test]
async fn test_stale_snapshot_refreshed_on_next_admin_visit() {
    let store = Arc::new(MemoryCacheStore::new());
    let service = SettingsMenuService::new(store, &config());
    let built_at = Utc::now();
    service.refresh(&registry("Settings"), built_at).await;

    let later = built_at + Duration::seconds(3601);
    let stale = service.menu(&registry("Options"), &editor(), later).await;
    assert_eq!(stale["options-general.php"].title, "Settings");

    let refreshed = service.menu(&registry("Options"), &admin(), later).await;
    assert_eq!(refreshed["options-general.php"].title, "Options");
}

#[tokio::test]
async fn test_render_for_different_users() {
    let store = Arc::new(MemoryCacheStore::new());
    let service = SettingsMenuService::new(store, &config());
    let entries = service.menu(&registry("Settings"), &admin(), Utc::now()).await;

    let mut admin_tree = MemoryMenuTree::new();
    admin_tree.add("site-name", "rs-manage-site", "", "");
    assert_eq!(render_settings_menu(&mut admin_tree, "rs-manage-site", &entries, &admin()), 2);
    assert!(admin_tree.get("rs-settings-options-general-php--smtp").is_some());

    let mut editor_tree = MemoryMenuTree::new();
    assert_eq!(render_settings_menu(&mut editor_tree, "rs-manage-site", &entries, &editor()), 1);
    assert_eq!(editor_tree.nodes()[0].id, "rs-settings-tools-php");
}

#[tokio::test]
async fn test_child_and_top_level_with_same_slug_both_render() {
    let mut children = HashMap::new();
    children.insert(
        "woocommerce".to_string(),
        vec![RawMenuItem::new("Marketing Hub", "manage_woocommerce", "marketing")],
    );
    let registry = StaticRegistry {
        top_level: vec![
            RawMenuItem::new("WooCommerce", "manage_woocommerce", "woocommerce"),
            RawMenuItem::new("Marketing", "manage_woocommerce", "woocommerce-marketing"),
        ],
        children,
    };
    let service = SettingsMenuService::new(Arc::new(MemoryCacheStore::new()), &config());
    let entries = service.menu(&registry, &admin(), Utc::now()).await;

    let mut tree = MemoryMenuTree::new();
    assert_eq!(render_settings_menu(&mut tree, "rs-manage-site", &entries, &admin()), 2);
    assert_eq!(tree.nodes().len(), 3);

    let hub = tree.get("rs-settings-woocommerce--marketing").unwrap();
    assert_eq!(hub.title, "Marketing Hub");
    assert_eq!(hub.parent_id.as_deref(), Some("rs-settings-woocommerce"));
    let marketing = tree.get("rs-settings-woocommerce-marketing").unwrap();
    assert_eq!(marketing.title, "Marketing");
    assert_eq!(marketing.parent_id.as_deref(), Some("rs-manage-site"));
}

#[tokio::test]
async fn test_invalidate_forces_rebuild() {
    let store = Arc::new(MemoryCacheStore::new());
    let service = SettingsMenuService::new(store, &config());
    service.refresh(&registry("Settings"), Utc::now()).await;

    assert!(service.invalidate().await);
    let entries = service.menu(&registry("Settings"), &editor(), Utc::now()).await;
    assert!(entries.is_empty());
}

struct Navigations;

impl PostSource for Navigations {
    fn posts_of_type(&self, _post_type: &str) -> Vec<PostSummary> {
        vec![
            PostSummary::new(1, "Header navigation", "https://example.com/wp-admin/site-editor.php?postId=1"),
            PostSummary::new(2, "Header navigation", "https://example.com/wp-admin/site-editor.php?postId=1"),
        ]
    }
}

#[tokio::test]
async fn test_post_listing_cached_until_cleared() {
    let store = Arc::new(MemoryCacheStore::new());
    let posts = PostQueryService::new(store.clone(), &config());

    let listed = posts.query_post_type(&Navigations, "wp_navigation").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(store.keys("rs_admin_bar_query_"), vec!["rs_admin_bar_query_wp_navigation".to_string()]);

    assert!(posts.clear_cached_post_queries("wp_navigation").await);
    assert!(store.keys("rs_admin_bar_query_").is_empty());
}
