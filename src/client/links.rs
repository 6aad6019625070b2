//! Friend links: admin CRUD and the blog's cached listing.

use reqwest::Method;

use brezza_api_types::{FriendLink, FriendLinkRequest};

use super::{ApiClient, Auth};
use crate::cache::{CacheManager, keys};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_friend_links(&self) -> Result<Vec<FriendLink>, ApiError> {
        self.request(Method::GET, "api/admin/links", None, None, Auth::Bearer)
            .await
    }

    pub async fn get_friend_link(&self, id: i64) -> Result<FriendLink, ApiError> {
        self.request(
            Method::GET,
            &format!("api/admin/links/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn create_friend_link(
        &self,
        body: &FriendLinkRequest,
    ) -> Result<FriendLink, ApiError> {
        self.request(
            Method::POST,
            "api/admin/links",
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn update_friend_link(
        &self,
        id: i64,
        body: &FriendLinkRequest,
    ) -> Result<FriendLink, ApiError> {
        self.request(
            Method::PUT,
            &format!("api/admin/links/{id}"),
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    pub async fn delete_friend_link(&self, id: i64) -> Result<(), ApiError> {
        self.request_unit(
            Method::DELETE,
            &format!("api/admin/links/{id}"),
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn blog_friend_links(&self) -> Result<Vec<FriendLink>, ApiError> {
        self.request(Method::GET, "api/blog/links", None, None, Auth::None)
            .await
    }

    pub async fn blog_friend_links_cached(
        &self,
        cache: &CacheManager,
    ) -> Result<Vec<FriendLink>, ApiError> {
        cache
            .get_or_set(keys::FRIEND_LINKS, || self.blog_friend_links())
            .await
    }
}
