//! Response from `courses/:course_id/assignments`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};
use url::Url;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Assignment {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<u64>,
    pub assignment_group_id: Option<u64>,
    pub html_url: Option<Url>,
    pub points_possible: Option<f64>,
    pub grading_type: Option<String>,
    #[serde(default)]
    pub submission_types: Vec<String>,
    pub position: Option<u64>,
    pub published: Option<bool>,
    #[serde(with = "rfc3339::option", default)]
    pub due_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}
