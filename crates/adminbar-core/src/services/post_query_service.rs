//! Hour-long cache of per-post-type listings (navigation menus, template
//! parts, patterns) shown under the site editor links

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use adminbar_shared::config::AppConfig;
use adminbar_shared::constants::{CACHEABLE_POST_TYPES, POST_QUERY_CACHE_PREFIX};

use crate::domain::PostSummary;
use crate::repositories::{CacheStore, PostSource};

pub struct PostQueryService<C: CacheStore> {
    store: Arc<C>,
    ttl: Duration,
}

/// Keep only the first post for each edit URL.
/// Several template parts can point at the same edit screen.
pub fn dedup_by_edit_url(posts: Vec<PostSummary>) -> Vec<PostSummary> {
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|p| seen.insert(p.edit_url.clone()))
        .collect()
}

pub fn cache_key(post_type: &str) -> String {
    format!("{POST_QUERY_CACHE_PREFIX}{post_type}")
}

impl<C: CacheStore> PostQueryService<C> {
    pub fn new(store: Arc<C>, config: &AppConfig) -> Self {
        Self {
            store,
            ttl: config.cache.post_query_ttl(),
        }
    }

    /// Posts of `post_type`, from cache when a non-empty listing is stored
    pub async fn query_post_type<S>(&self, source: &S, post_type: &str) -> Vec<PostSummary>
    where
        S: PostSource + ?Sized,
    {
        let key = cache_key(post_type);

        match self.store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<PostSummary>>(&raw) {
                Ok(posts) if !posts.is_empty() => {
                    debug!("Post listing cache hit for {}", post_type);
                    return posts;
                }
                Ok(_) => {}
                Err(e) => warn!("Discarding undecodable post listing for {}: {}", post_type, e),
            },
            Ok(None) => {}
            Err(e) => warn!("Failed to read post listing cache for {}: {}", post_type, e),
        }

        let posts = dedup_by_edit_url(source.posts_of_type(post_type));

        match serde_json::to_string(&posts) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&key, raw, self.ttl).await {
                    warn!("Failed to cache post listing for {}: {}", post_type, e);
                }
            }
            Err(e) => warn!("Failed to encode post listing for {}: {}", post_type, e),
        }

        posts
    }

    /// Drop the cached listing after a post of a cacheable type was saved.
    /// Returns whether a listing was removed.
    pub async fn clear_cached_post_queries(&self, post_type: &str) -> bool {
        if !CACHEABLE_POST_TYPES.contains(&post_type) {
            return false;
        }
        match self.store.delete(&cache_key(post_type)).await {
            Ok(removed) => removed,
            Err(e) => {
                warn!("Failed to clear post listing cache for {}: {}", post_type, e);
                false
            }
        }
    }
}
