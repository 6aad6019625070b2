//! Categories and tags: admin CRUD plus the blog's cached reads.
//!
//! Taxonomy changes rarely, so the blog-facing collection reads memoize
//! through the passed-in [`CacheManager`] under the `taxonomy:` prefix.
//! Admin mutations should follow up with [`clear_taxonomy_cache`].

use reqwest::Method;

use brezza_api_types::{Category, CategoryRequest, Tag, TagRequest};

use super::{ApiClient, Auth};
use crate::cache::{CacheManager, keys};
use crate::error::ApiError;

impl ApiClient {
    // Categories, admin surface.

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.request(Method::GET, "api/admin/categories", None, None, Auth::Bearer)
            .await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.request(
            Method::GET,
            &format!("api/admin/categories/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn create_category(&self, body: &CategoryRequest) -> Result<Category, ApiError> {
        self.request(
            Method::POST,
            "api/admin/categories",
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn update_category(
        &self,
        id: i64,
        body: &CategoryRequest,
    ) -> Result<Category, ApiError> {
        self.request(
            Method::PUT,
            &format!("api/admin/categories/{id}"),
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.request_unit(
            Method::DELETE,
            &format!("api/admin/categories/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    // Tags, admin surface.

    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.request(Method::GET, "api/admin/tags", None, None, Auth::Bearer)
            .await
    }

    pub async fn get_tag(&self, id: i64) -> Result<Tag, ApiError> {
        self.request(
            Method::GET,
            &format!("api/admin/tags/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn create_tag(&self, body: &TagRequest) -> Result<Tag, ApiError> {
        self.request(
            Method::POST,
            "api/admin/tags",
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn update_tag(&self, id: i64, body: &TagRequest) -> Result<Tag, ApiError> {
        self.request(
            Method::PUT,
            &format!("api/admin/tags/{id}"),
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn delete_tag(&self, id: i64) -> Result<(), ApiError> {
        self.request_unit(
            Method::DELETE,
            &format!("api/admin/tags/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    // Public blog surface.

    pub async fn blog_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.request(Method::GET, "api/blog/categories", None, None, Auth::None)
            .await
    }

    pub async fn blog_categories_cached(
        &self,
        cache: &CacheManager,
    ) -> Result<Vec<Category>, ApiError> {
        cache
            .get_or_set(keys::CATEGORIES, || self.blog_categories())
            .await
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Category, ApiError> {
        self.request(
            Method::GET,
            &format!("api/blog/categories/{slug}"),
            None,
            None,
            Auth::None,
        )
        .await
    }

    pub async fn blog_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.request(Method::GET, "api/blog/tags", None, None, Auth::None)
            .await
    }

    pub async fn blog_tags_cached(&self, cache: &CacheManager) -> Result<Vec<Tag>, ApiError> {
        cache.get_or_set(keys::TAGS, || self.blog_tags()).await
    }

    pub async fn tag_by_slug(&self, slug: &str) -> Result<Tag, ApiError> {
        self.request(
            Method::GET,
            &format!("api/blog/tags/{slug}"),
            None,
            None,
            Auth::None,
        )
        .await
    }
}

/// Drops every cached taxonomy collection (categories, tags, friend links).
pub fn clear_taxonomy_cache(cache: &CacheManager) {
    cache.remove_by_prefix(keys::TAXONOMY_PREFIX);
}
