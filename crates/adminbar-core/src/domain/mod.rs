//! # Admin Bar Core - Domain Module
//! 
//! Menu entities and cache snapshots.

pub mod raw_menu_item;
pub mod menu_entry;
pub mod menu_cache;
pub mod menu_node;
pub mod post_summary;

// Re-export all entities and enums
pub use raw_menu_item::RawMenuItem;
pub use menu_entry::{MenuEntries, MenuEntry};
pub use menu_cache::{Freshness, MenuCache, MenuLookup};
pub use menu_node::MenuNode;
pub use post_summary::PostSummary;
