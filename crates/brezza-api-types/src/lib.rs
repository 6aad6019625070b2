//! Wire types for the Brezza blog backend API.
//!
//! Every payload here is owned by the backend; this crate only mirrors its
//! JSON shapes (camelCase fields, zone-less ISO-8601 timestamps) so both
//! frontends and the CLI can share one set of definitions.

pub mod auth;
pub mod dashboard;
pub mod envelope;
pub mod links;
pub mod media;
pub mod posts;
pub mod site;
pub mod taxonomy;

pub use auth::{AuthResponse, LoginRequest, UserInfo};
pub use dashboard::{DashboardStats, RecentPost};
pub use envelope::{ApiEnvelope, PageResponse, SUCCESS_CODE};
pub use links::{FriendLink, FriendLinkRequest};
pub use media::Media;
pub use posts::{Post, PostRequest, TagSummary};
pub use site::{
    AuthorConfig, BackgroundType, ConfigEntry, ConfigRequest, SiteAnalyticsConfig,
    SiteBasicConfig, SiteConfig, SiteFooterConfig, SiteSeoConfig, SkillConfig, SocialLinkConfig,
};
pub use taxonomy::{Category, CategoryRequest, Tag, TagRequest};
