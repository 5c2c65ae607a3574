//! Responses from `courses/:course_id/groups` and
//! `courses/:course_id/group_categories`.

use serde::Deserialize;
use url::Url;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Group {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub followed_by_user: Option<bool>,
    pub join_level: Option<String>,
    pub members_count: Option<u64>,
    pub avatar_url: Option<Url>,
    pub context_type: Option<String>,
    pub course_id: Option<u64>,
    pub group_category_id: Option<u64>,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct GroupCategory {
    pub id: u64,
    pub name: Option<String>,
    pub role: Option<String>,
    pub self_signup: Option<String>,
    pub auto_leader: Option<String>,
    pub context_type: Option<String>,
    pub course_id: Option<u64>,
    pub group_limit: Option<u64>,
}
