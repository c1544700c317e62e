//! Navigation registry trait (port)

use crate::domain::RawMenuItem;

/// Read-only view of the host's live, unfiltered admin navigation.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationRegistry: Send + Sync {
    /// Top-level items in registry order
    fn top_level(&self) -> Vec<RawMenuItem>;

    /// Sub-pages registered under a top-level item, keyed by its raw path
    fn children_of(&self, parent_path: &str) -> Vec<RawMenuItem>;
}
