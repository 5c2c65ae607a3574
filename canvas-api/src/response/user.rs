//! Responses from `users/:id` and `users/self/course_nicknames`.

use std::fmt;

use serde::Deserialize;
use url::Url;

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct User {
    pub id: u64,
    pub name: Option<String>,
    pub sortable_name: Option<String>,
    pub short_name: Option<String>,
    pub sis_user_id: Option<String>,
    pub login_id: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Url>,
    pub locale: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A name the calling user gave to a course, shown instead of its real one.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct CourseNickname {
    pub course_id: u64,
    /// The actual name of the course.
    pub name: Option<String>,
    pub nickname: String,
}

impl fmt::Display for CourseNickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nickname, self.course_id)
    }
}
