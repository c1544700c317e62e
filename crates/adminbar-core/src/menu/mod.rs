//! Settings-menu synthesis: title cleaning, cache building, and freshness checks

pub mod markup;
pub mod builder;
pub mod freshness;

pub use markup::clean_title;
pub use builder::{build_menu_cache, BuildOptions};
pub use freshness::get_menu;
