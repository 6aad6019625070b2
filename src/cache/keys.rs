//! Well-known cache keys.
//!
//! Keys are plain strings; uniqueness is the caller's responsibility and the
//! only namespacing is the `<area>:` prefix convention used here.

use std::fmt::Display;

pub const SITE_CONFIG: &str = "config:site";
pub const CATEGORIES: &str = "taxonomy:categories";
pub const TAGS: &str = "taxonomy:tags";
pub const FRIEND_LINKS: &str = "taxonomy:links";
pub const DASHBOARD_STATS: &str = "dashboard:stats";

/// Prefix covering every taxonomy collection, for bulk invalidation.
pub const TAXONOMY_PREFIX: &str = "taxonomy:";

/// Deterministic key for one page of a post listing. Unset filters are
/// encoded as `-` so distinct filter combinations never collide.
pub fn posts_page(
    page: Option<u32>,
    size: Option<u32>,
    status: Option<i32>,
    category_id: Option<i64>,
    tag_id: Option<i64>,
) -> String {
    fn part<T: Display>(value: Option<T>) -> String {
        value.map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    format!(
        "posts:{}:{}:{}:{}:{}",
        part(page),
        part(size),
        part(status),
        part(category_id),
        part(tag_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_page_is_deterministic_and_collision_free() {
        assert_eq!(
            posts_page(Some(2), Some(10), None, None, None),
            "posts:2:10:-:-:-"
        );
        assert_ne!(
            posts_page(Some(2), Some(10), Some(1), None, None),
            posts_page(Some(2), Some(10), None, Some(1), None)
        );
    }
}
