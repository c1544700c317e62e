//! Menu tree sink trait (port)

use crate::domain::MenuNode;

/// The host's mutable admin-bar tree. Adding an id that already exists
/// replaces the node in place.
pub trait MenuTreeSink {
    fn add(&mut self, parent_id: &str, id: &str, title: &str, href: &str);
    fn remove(&mut self, id: &str) -> bool;
    fn get(&self, id: &str) -> Option<MenuNode>;
}
