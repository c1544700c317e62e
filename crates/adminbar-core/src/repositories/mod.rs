//! Host collaborator traits (ports)

pub mod navigation_registry;
pub mod permission_oracle;
pub mod cache_store;
pub mod menu_tree_sink;
pub mod post_source;

pub use navigation_registry::NavigationRegistry;
pub use permission_oracle::PermissionOracle;
pub use cache_store::CacheStore;
pub use menu_tree_sink::MenuTreeSink;
pub use post_source::PostSource;

#[cfg(test)]
pub use navigation_registry::MockNavigationRegistry;
#[cfg(test)]
pub use permission_oracle::MockPermissionOracle;
#[cfg(test)]
pub use cache_store::MockCacheStore;
#[cfg(test)]
pub use post_source::MockPostSource;
