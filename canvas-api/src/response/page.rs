//! Response from `courses/:course_id/pages`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};

/// A wiki page.
///
/// Pages are addressed by their `url`, a slug derived from the title.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Page {
    pub url: String,
    pub title: Option<String>,
    pub page_id: Option<u64>,
    pub body: Option<String>,
    pub editing_roles: Option<String>,
    pub published: Option<bool>,
    pub front_page: Option<bool>,
    pub locked_for_user: Option<bool>,
    #[serde(with = "rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub course_id: Option<u64>,
}
