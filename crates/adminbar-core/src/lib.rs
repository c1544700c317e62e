//! # Admin Bar Core
//! 
//! Menu domain, the settings-menu cache builder, host ports, and the services
//! that read, refresh, and render cached admin menus.

pub mod domain;
pub mod menu;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use menu::{build_menu_cache, clean_title, get_menu, BuildOptions};
