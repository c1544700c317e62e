//! Cached view of a post: just enough to link to its edit screen

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    pub edit_url: String,
}

impl PostSummary {
    pub fn new(id: u64, title: &str, edit_url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            edit_url: edit_url.to_string(),
        }
    }
}
