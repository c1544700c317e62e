//! # Admin Bar Infrastructure
//! 
//! In-process implementations (adapters) of the core ports.

pub mod cache;
pub mod menu_tree;
mod time;

pub use cache::{KvStore, MemoryCacheStore};
pub use menu_tree::MemoryMenuTree;
