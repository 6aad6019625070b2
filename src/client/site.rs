//! Site configuration (key/value entries and the assembled form) plus
//! dashboard statistics.
//!
//! The blog's site-config read is the canonical cached resource; the admin
//! reads stay fresh so edits round-trip immediately. Stats are always
//! fetched live.

use reqwest::Method;

use brezza_api_types::{ConfigEntry, ConfigRequest, DashboardStats, SiteConfig};

use super::{ApiClient, Auth};
use crate::cache::{CacheManager, keys};
use crate::error::ApiError;

impl ApiClient {
    /// All rows of the backend's key/value config table.
    pub async fn config_entries(&self) -> Result<Vec<ConfigEntry>, ApiError> {
        self.request(Method::GET, "api/admin/config", None, None, Auth::Bearer)
            .await
    }

    /// A single config row by key.
    pub async fn config_entry(&self, key: &str) -> Result<ConfigEntry, ApiError> {
        let pairs = [("key", key.to_string())];
        self.request(
            Method::GET,
            "api/admin/config",
            Some(&pairs),
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn save_config(&self, body: &ConfigRequest) -> Result<ConfigEntry, ApiError> {
        self.request(
            Method::POST,
            "api/admin/config",
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    /// Assembled site configuration, admin view. Uncached so the config form
    /// always shows what was just saved.
    pub async fn site_config(&self) -> Result<SiteConfig, ApiError> {
        self.request(
            Method::GET,
            "api/admin/config/site",
            None,
            None,
            Auth::Bearer,
        )
        .await
    }

    pub async fn save_site_config(&self, body: &SiteConfig) -> Result<(), ApiError> {
        self.request_unit(
            Method::POST,
            "api/admin/config/site",
            None,
            Some(serde_json::to_value(body)?),
            Auth::Bearer,
        )
        .await
    }

    /// Site configuration as the public blog renders it.
    pub async fn blog_site_config(&self) -> Result<SiteConfig, ApiError> {
        self.request(Method::GET, "api/blog/config/site", None, None, Auth::None)
            .await
    }

    pub async fn blog_site_config_cached(
        &self,
        cache: &CacheManager,
    ) -> Result<SiteConfig, ApiError> {
        cache
            .get_or_set(keys::SITE_CONFIG, || self.blog_site_config())
            .await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.request(
            Method::GET,
            "api/admin/dashboard/stats",
            None,
            None,
            Auth::Bearer,
        )
        .await
    }
}

/// Invalidates the cached site configuration after an admin save.
pub fn clear_site_config_cache(cache: &CacheManager) {
    cache.remove(keys::SITE_CONFIG);
}
