//! Response from `courses/:course_id/modules`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};
use url::Url;

use crate::response::WorkflowState;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Module {
    pub id: u64,
    pub name: Option<String>,
    pub position: Option<u64>,
    pub workflow_state: Option<WorkflowState>,
    #[serde(with = "rfc3339::option", default)]
    pub unlock_at: Option<OffsetDateTime>,
    pub require_sequential_progress: Option<bool>,
    pub prerequisite_module_ids: Option<Vec<u64>>,
    pub items_count: Option<u64>,
    pub items_url: Option<Url>,
    /// Completion state for the calling user, only present for students.
    pub state: Option<String>,
    pub published: Option<bool>,
    #[serde(default)]
    pub course_id: Option<u64>,
}
