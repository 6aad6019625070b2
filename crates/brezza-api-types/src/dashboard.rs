use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Aggregate counters for the admin dashboard, always fetched fresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub post_count: u64,
    pub category_count: u64,
    pub tag_count: u64,
    pub friend_link_count: u64,
    pub total_view_count: u64,
    #[serde(default)]
    pub recent_posts: Vec<RecentPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub id: i64,
    pub title: String,
    pub status: i32,
    pub view_count: u64,
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
