//! In-memory admin-bar tree

use adminbar_core::domain::MenuNode;
use adminbar_core::repositories::MenuTreeSink;

/// Ordered node list standing in for the host's admin-bar object
#[derive(Debug, Default, Clone)]
pub struct MemoryMenuTree {
    nodes: Vec<MenuNode>,
}

impl MemoryMenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn children_of(&self, parent_id: &str) -> Vec<&MenuNode> {
        self.nodes
            .iter()
            .filter(|n| n.parent_id.as_deref() == Some(parent_id))
            .collect()
    }
}

impl MenuTreeSink for MemoryMenuTree {
    fn add(&mut self, parent_id: &str, id: &str, title: &str, href: &str) {
        let node = MenuNode::new(parent_id, id, title, href);
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
    }

    /// Removes the node and everything below it
    fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.nodes.iter().position(|n| n.id == id) else {
            return false;
        };
        self.nodes.remove(pos);

        let orphans: Vec<String> = self
            .children_of(id)
            .into_iter()
            .map(|n| n.id.clone())
            .collect();
        for orphan in orphans {
            self.remove(&orphan);
        }
        true
    }

    fn get(&self, id: &str) -> Option<MenuNode> {
        self.nodes.iter().find(|n| n.id == id).cloned()
    }
}
