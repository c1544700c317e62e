//! Expiring key-value storage

mod entry;
pub mod kv;
pub mod memory_store;

pub use kv::KvStore;
pub use memory_store::MemoryCacheStore;
