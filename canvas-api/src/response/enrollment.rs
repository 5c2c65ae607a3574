//! Response from `courses/:course_id/enrollments`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};

use crate::response::user::User;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Enrollment {
    pub id: u64,
    pub course_id: Option<u64>,
    pub course_section_id: Option<u64>,
    pub user_id: Option<u64>,
    /// The enrollment type, e.g. `StudentEnrollment` or `TeacherEnrollment`.
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<u64>,
    pub enrollment_state: Option<String>,
    pub limit_privileges_to_course_section: Option<bool>,
    #[serde(with = "rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub last_activity_at: Option<OffsetDateTime>,
    pub user: Option<User>,
}
