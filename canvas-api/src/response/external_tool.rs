//! Response from `courses/:course_id/external_tools`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};

/// An LTI tool installed into a course or account.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct ExternalTool {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub domain: Option<String>,
    pub consumer_key: Option<String>,
    pub privacy_level: Option<String>,
    pub workflow_state: Option<String>,
    #[serde(with = "rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}
