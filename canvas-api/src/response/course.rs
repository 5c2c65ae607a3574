//! Response from `courses/:id`.

use std::fmt;

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};

use crate::response::WorkflowState;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Course {
    pub id: u64,
    pub name: Option<String>,
    pub course_code: Option<String>,
    pub workflow_state: Option<WorkflowState>,
    pub account_id: Option<u64>,
    pub root_account_id: Option<u64>,
    pub enrollment_term_id: Option<u64>,
    pub uuid: Option<String>,
    pub sis_course_id: Option<String>,
    pub integration_id: Option<String>,
    #[serde(with = "rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub start_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub end_at: Option<OffsetDateTime>,
    pub default_view: Option<String>,
    pub license: Option<String>,
    pub is_public: Option<bool>,
    pub public_syllabus: Option<bool>,
    pub syllabus_body: Option<String>,
    pub time_zone: Option<String>,
    pub locale: Option<String>,
    pub total_students: Option<u64>,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}
