//! Response from `courses/:course_id/sections` and `sections/:id`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Section {
    pub id: u64,
    pub name: Option<String>,
    pub course_id: Option<u64>,
    pub sis_section_id: Option<String>,
    pub integration_id: Option<String>,
    /// Set if the section was cross-listed from another course.
    pub nonxlist_course_id: Option<u64>,
    #[serde(with = "rfc3339::option", default)]
    pub start_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub end_at: Option<OffsetDateTime>,
    pub restrict_enrollments_to_section_dates: Option<bool>,
    pub total_students: Option<u64>,
}
