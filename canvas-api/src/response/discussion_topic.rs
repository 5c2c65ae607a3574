//! Response from `courses/:course_id/discussion_topics`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};
use url::Url;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct DiscussionTopic {
    pub id: u64,
    pub title: Option<String>,
    pub message: Option<String>,
    pub html_url: Option<Url>,
    pub discussion_type: Option<String>,
    pub user_name: Option<String>,
    pub discussion_subentry_count: Option<u64>,
    pub pinned: Option<bool>,
    pub locked: Option<bool>,
    pub published: Option<bool>,
    pub position: Option<u64>,
    #[serde(with = "rfc3339::option", default)]
    pub posted_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub last_reply_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub delayed_post_at: Option<OffsetDateTime>,
    /// Filled in from the requesting course.
    #[serde(default)]
    pub course_id: Option<u64>,
}
