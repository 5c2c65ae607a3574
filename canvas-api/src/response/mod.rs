//! Resources as returned by the Canvas REST API.

pub mod assignment;
pub mod course;
pub mod discussion_topic;
pub mod enrollment;
pub mod external_tool;
pub mod group;
pub mod module;
pub mod page;
pub mod quiz;
pub mod section;
pub mod user;

use serde::Deserialize;

/// Publication state shared by most course content.
#[derive(Deserialize, Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Unpublished,
    Available,
    Active,
    Published,
    Completed,
    Deleted,
    #[serde(other)]
    Unknown,
}
