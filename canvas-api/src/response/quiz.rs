//! Response from `courses/:course_id/quizzes`.

use serde::Deserialize;
use time::{serde::rfc3339, OffsetDateTime};
use url::Url;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Quiz {
    pub id: u64,
    pub title: Option<String>,
    pub html_url: Option<Url>,
    pub description: Option<String>,
    pub quiz_type: Option<String>,
    pub assignment_group_id: Option<u64>,
    pub time_limit: Option<u64>,
    pub shuffle_answers: Option<bool>,
    pub allowed_attempts: Option<i64>,
    pub points_possible: Option<f64>,
    pub question_count: Option<u64>,
    pub published: Option<bool>,
    #[serde(with = "rfc3339::option", default)]
    pub due_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub lock_at: Option<OffsetDateTime>,
    #[serde(with = "rfc3339::option", default)]
    pub unlock_at: Option<OffsetDateTime>,
    /// The course this quiz belongs to.
    ///
    /// Not part of the response, filled in from the requesting course.
    #[serde(default)]
    pub course_id: Option<u64>,
}
