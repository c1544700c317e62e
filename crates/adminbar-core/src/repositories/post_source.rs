//! Post source trait (port)

use crate::domain::PostSummary;

#[cfg_attr(test, mockall::automock)]
pub trait PostSource: Send + Sync {
    /// Every post of `post_type`, in the host's query order
    fn posts_of_type(&self, post_type: &str) -> Vec<PostSummary>;
}
