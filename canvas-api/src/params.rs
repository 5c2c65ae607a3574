//! Payloads for create and update calls.
//!
//! Every payload leaves unset fields out of the request. Attributes without a
//! dedicated field can be passed through `extra`.

use canvas_api_derive::RequiredFields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::error::{RequestError, Result};

/// Declares which fields of a payload Canvas refuses to do without.
///
/// Usually derived, see `canvas_api_derive::RequiredFields`.
pub trait RequiredFields {
    /// The name of the first required field that is unset, if any.
    fn missing_field(&self) -> Option<&'static str>;

    fn validate(&self) -> Result<()> {
        match self.missing_field() {
            Some(field) => Err(RequestError::RequiredFieldMissing { field }),
            None => Ok(()),
        }
    }
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct CourseParams {
    pub name: Option<String>,
    pub course_code: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_at: Option<OffsetDateTime>,
    pub license: Option<String>,
    pub is_public: Option<bool>,
    pub public_description: Option<String>,
    pub syllabus_body: Option<String>,
    pub default_view: Option<String>,
    pub time_zone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct QuizParams {
    #[required]
    pub title: Option<String>,
    pub description: Option<String>,
    pub quiz_type: Option<String>,
    pub time_limit: Option<u64>,
    pub shuffle_answers: Option<bool>,
    pub allowed_attempts: Option<i64>,
    pub published: Option<bool>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub unlock_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub lock_at: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizParams {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct ModuleParams {
    #[required]
    pub name: Option<String>,
    pub position: Option<u64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub unlock_at: Option<OffsetDateTime>,
    pub require_sequential_progress: Option<bool>,
    pub published: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModuleParams {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct AssignmentParams {
    #[required]
    pub name: Option<String>,
    pub description: Option<String>,
    pub points_possible: Option<f64>,
    pub grading_type: Option<String>,
    pub submission_types: Option<Vec<String>>,
    pub position: Option<u64>,
    pub published: Option<bool>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_at: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssignmentParams {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Payload for wiki pages.
///
/// `title` is only required when creating a page.
#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct PageParams {
    #[required]
    pub title: Option<String>,
    pub body: Option<String>,
    pub editing_roles: Option<String>,
    pub notify_of_update: Option<bool>,
    pub published: Option<bool>,
    pub front_page: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageParams {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct SectionParams {
    pub name: Option<String>,
    pub sis_section_id: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_at: Option<OffsetDateTime>,
    pub restrict_enrollments_to_section_dates: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct EnrollmentParams {
    pub enrollment_state: Option<String>,
    pub course_section_id: Option<u64>,
    pub limit_privileges_to_course_section: Option<bool>,
    pub notify: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct DiscussionTopicParams {
    pub title: Option<String>,
    pub message: Option<String>,
    pub discussion_type: Option<String>,
    pub published: Option<bool>,
    pub pinned: Option<bool>,
    pub is_announcement: Option<bool>,
    pub require_initial_post: Option<bool>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub delayed_post_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub lock_at: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(RequiredFields, Serialize, Default, Clone, Debug, PartialEq)]
pub struct GroupCategoryParams {
    #[required]
    pub name: Option<String>,
    pub self_signup: Option<String>,
    pub auto_leader: Option<String>,
    pub group_limit: Option<u64>,
    pub create_group_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GroupCategoryParams {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Course settings, both as returned and as sent for updates.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct CourseSettings {
    pub allow_student_discussion_topics: Option<bool>,
    pub allow_student_forum_attachments: Option<bool>,
    pub allow_student_discussion_editing: Option<bool>,
    pub allow_student_organized_groups: Option<bool>,
    pub grading_standard_enabled: Option<bool>,
    pub grading_standard_id: Option<u64>,
    pub hide_final_grades: Option<bool>,
    pub hide_distribution_graphs: Option<bool>,
    pub lock_all_announcements: Option<bool>,
    pub restrict_student_past_view: Option<bool>,
    pub restrict_student_future_view: Option<bool>,
    pub show_announcements_on_home_page: Option<bool>,
    pub home_page_announcement_limit: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_required_fields() {
        assert_eq!(Some("title"), QuizParams::default().missing_field());
        assert_eq!(None, QuizParams::new("Quiz").missing_field());
        assert_eq!(Some("name"), ModuleParams::default().missing_field());
        assert_eq!(Some("name"), AssignmentParams::default().missing_field());
        assert_eq!(Some("title"), PageParams::default().missing_field());
        assert_eq!(Some("name"), GroupCategoryParams::default().missing_field());
        assert_eq!(None, CourseParams::default().missing_field());
        assert_eq!(None, SectionParams::default().missing_field());
        assert_eq!(None, DiscussionTopicParams::default().missing_field());
        assert!(matches!(
            QuizParams::default().validate(),
            Err(RequestError::RequiredFieldMissing { field: "title" })
        ));
    }

    #[test]
    fn test_quiz_params_serialization() -> serde_json::Result<()> {
        let mut params = QuizParams::new("Newer Title");
        params.time_limit = Some(30);
        params.due_at = Some(datetime!(2017-05-01 23:59 UTC));
        params
            .extra
            .insert("one_question_at_a_time".to_string(), json!(true));
        assert_eq!(
            json!({
                "title": "Newer Title",
                "time_limit": 30,
                "due_at": "2017-05-01T23:59:00Z",
                "one_question_at_a_time": true
            }),
            serde_json::to_value(&params)?
        );
        Ok(())
    }

    #[test]
    fn test_course_settings_serde() -> serde_json::Result<()> {
        let settings: CourseSettings = serde_json::from_value(json!({
            "allow_student_discussion_topics": true,
            "hide_final_grades": false,
            "some_new_setting": "value"
        }))?;
        assert_eq!(Some(true), settings.allow_student_discussion_topics);
        assert_eq!(Some(false), settings.hide_final_grades);
        assert_eq!(None, settings.lock_all_announcements);
        assert_eq!(Some(&json!("value")), settings.extra.get("some_new_setting"));

        let update = CourseSettings {
            hide_final_grades: Some(true),
            ..CourseSettings::default()
        };
        assert_eq!(
            json!({"hide_final_grades": true}),
            serde_json::to_value(&update)?
        );
        Ok(())
    }
}
