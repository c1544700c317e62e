//! Application-wide constants

pub const HOUR_IN_SECONDS: u64 = 3600;
pub const DAY_IN_SECONDS: u64 = 86400;

pub const DEFAULT_ADMIN_BASE_URL: &str = "http://localhost/wp-admin/";

pub const SETTINGS_MENU_CACHE_KEY: &str = "rs_admin_bar_settings_menu";
pub const DEFAULT_SOFT_WINDOW_SECS: u64 = HOUR_IN_SECONDS;
pub const DEFAULT_HARD_WINDOW_SECS: u64 = 30 * DAY_IN_SECONDS;

pub const POST_QUERY_CACHE_PREFIX: &str = "rs_admin_bar_query_";
pub const DEFAULT_POST_QUERY_TTL_SECS: u64 = HOUR_IN_SECONDS;

/// Post types whose listings are cached and cleared when one of their posts is saved.
pub const CACHEABLE_POST_TYPES: [&str; 3] = ["wp_navigation", "wp_template_part", "wp_block"];

pub const DEFAULT_PRIVILEGED_CAPABILITY: &str = "manage_options";

/// Menu titles already surfaced by the site and content groups of the admin bar.
pub const DEFAULT_DENY_LIST: [&str; 8] = [
    "Dashboard",
    "Posts",
    "Media",
    "Pages",
    "Comments",
    "Appearance",
    "Plugins",
    "Users",
];

/// Marks a menu path that points at a standalone admin screen.
pub const PAGE_FILE_MARKER: &str = ".php";
pub const ADMIN_PAGE_FILE: &str = "admin.php";
pub const POST_LISTING_FILE: &str = "edit.php";

pub const SETTINGS_NODE_PREFIX: &str = "rs-settings";
