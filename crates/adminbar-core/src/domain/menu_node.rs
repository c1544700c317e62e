//! Node of the host menu tree

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub parent_id: Option<String>,
    pub id: String,
    pub title: String,
    pub href: Option<String>,
}

impl MenuNode {
    pub fn new(parent_id: &str, id: &str, title: &str, href: &str) -> Self {
        Self {
            parent_id: Some(parent_id.to_string()).filter(|p| !p.is_empty()),
            id: id.to_string(),
            title: title.to_string(),
            href: Some(href.to_string()).filter(|h| !h.is_empty()),
        }
    }
}
