//! Services that drive the cache builder and the host ports

pub mod settings_menu_service;
pub mod post_query_service;
pub mod menu_renderer;

pub use settings_menu_service::SettingsMenuService;
pub use post_query_service::{dedup_by_edit_url, PostQueryService};
pub use menu_renderer::render_settings_menu;
