//! Raw navigation item as handed over by the host registry

use serde::{Deserialize, Serialize};

/// One `(title, capability, path)` triple from the host's live menu registry.
/// Titles may still carry markup, and any field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawMenuItem {
    pub title: Option<String>,
    pub capability: Option<String>,
    pub path: Option<String>,
}

impl RawMenuItem {
    pub fn new(title: &str, capability: &str, path: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            capability: Some(capability.to_string()),
            path: Some(path.to_string()),
        }
    }

    /// Path with surrounding whitespace removed, `None` when missing or blank
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn capability(&self) -> &str {
        self.capability.as_deref().unwrap_or_default()
    }
}
