//! Site configuration payloads.
//!
//! The backend stores configuration as schema-free key/value blobs
//! (`ConfigEntry`) and assembles the structured `SiteConfig` on its
//! site-config routes. Clients parse the structured form at the boundary and
//! never pass raw blobs deeper in.

use serde::{Deserialize, Serialize};

/// One row of the backend's key/value config table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRequest {
    pub key: String,
    pub value: String,
}

/// Assembled site configuration as served by `/config/site`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub basic: SiteBasicConfig,
    pub seo: SiteSeoConfig,
    pub analytics: SiteAnalyticsConfig,
    pub footer: SiteFooterConfig,
    pub author: AuthorConfig,
    #[serde(default)]
    pub social_links: Vec<SocialLinkConfig>,
    #[serde(default)]
    pub skills: Vec<SkillConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBasicConfig {
    pub title: String,
    pub description: String,
    pub logo: String,
    pub favicon: String,
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub background_type: BackgroundType,
    pub background_url: String,
    pub overlay_opacity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Video,
    Image,
    #[default]
    None,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSeoConfig {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub og_image: String,
    pub twitter_card: String,
    pub twitter_site: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAnalyticsConfig {
    pub google_analytics_id: String,
    pub baidu_tongji_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFooterConfig {
    pub copyright: String,
    pub icp_number: String,
    pub icp_url: String,
    pub police_number: String,
    pub police_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub location: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkConfig {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    pub name: String,
    pub category: String,
}
