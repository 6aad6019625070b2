//! Post reads and admin CRUD. Posts are high-churn and always bypass the
//! cache.

use reqwest::Method;

use brezza_api_types::{PageResponse, Post, PostRequest};

use super::{ApiClient, Auth, query};
use crate::cache::keys;
use crate::error::ApiError;

/// Filters for a paginated post listing. Query parameter names follow the
/// backend's camelCase convention.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<i32>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
}

impl PostListQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId", category_id.to_string()));
        }
        if let Some(tag_id) = self.tag_id {
            pairs.push(("tagId", tag_id.to_string()));
        }
        pairs
    }

    /// Deterministic cache key for this filter combination, for callers that
    /// choose to memoize a listing themselves.
    pub fn cache_key(&self) -> String {
        keys::posts_page(
            self.page,
            self.size,
            self.status,
            self.category_id,
            self.tag_id,
        )
    }
}

impl ApiClient {
    // Admin surface.

    pub async fn list_posts(
        &self,
        filters: &PostListQuery,
    ) -> Result<PageResponse<Post>, ApiError> {
        let pairs = filters.to_pairs();
        self.request(
            Method::GET,
            "api/admin/posts",
            query(&pairs),
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.request(
            Method::GET,
            &format!("api/admin/posts/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn create_post(&self, body: &PostRequest) -> Result<Post, ApiError> {
        self.request(
            Method::POST,
            "api/admin/posts",
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn update_post(&self, id: i64, body: &PostRequest) -> Result<Post, ApiError> {
        self.request(
            Method::PUT,
            &format!("api/admin/posts/{id}"),
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.request_unit(
            Method::DELETE,
            &format!("api/admin/posts/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    // Public blog surface, unauthenticated.

    pub async fn published_posts(
        &self,
        filters: &PostListQuery,
    ) -> Result<PageResponse<Post>, ApiError> {
        let pairs = filters.to_pairs();
        self.request(
            Method::GET,
            "api/blog/posts",
            query(&pairs),
            None,
            Auth::None,
        )
        .await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Post, ApiError> {
        self.request(
            Method::GET,
            &format!("api/blog/posts/slug/{slug}"),
            None,
            None,
            Auth::None,
        )
        .await
    }

    pub async fn post_by_id(&self, id: i64) -> Result<Post, ApiError> {
        self.request(
            Method::GET,
            &format!("api/blog/posts/{id}"),
            None,
            None,
            Auth::None,
        )
        .await
    }
}
