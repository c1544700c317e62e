//! Utility functions

/// Lowercase a menu key into something usable as a node id: ASCII alphanumerics
/// are kept, every other run of characters collapses into a single dash.
pub fn node_slug(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut pending_dash = false;
    for c in key.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

pub fn is_absolute_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
