//! The entry point to a Canvas instance.

use std::fmt::Display;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    course::CourseHandle,
    error::Result,
    pagination::PaginatedList,
    requester::{escape_segment, Requester},
    resource::SectionHandle,
    response::{
        course::Course,
        section::Section,
        user::{CourseNickname, User},
    },
    token::AccessToken,
};

/// A client for one Canvas instance, authenticated as one user.
#[derive(Debug, Clone)]
pub struct Canvas {
    requester: Requester,
}

/// Formats a resource reference as a single path segment, optionally
/// qualified by an id type such as `sis_login_id`.
pub(crate) fn qualified_id(id: impl Display, id_type: Option<&str>) -> String {
    let id = escape_segment(&id.to_string());
    match id_type {
        Some(id_type) => format!("{id_type}:{id}"),
        None => id,
    }
}

impl Canvas {
    /// Creates a client for the instance at `base_url`.
    ///
    /// ```no_run
    /// # async fn run() -> canvas_api::Result<()> {
    /// use canvas_api::Canvas;
    ///
    /// let canvas = Canvas::new(
    ///     reqwest::Client::new(),
    ///     &"https://canvas.example.edu".parse().unwrap(),
    ///     "7~token".into(),
    /// )?;
    /// let course = canvas.get_course(1).await?;
    /// println!("{course}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(http_client: reqwest::Client, base_url: &Url, token: AccessToken) -> Result<Self> {
        let requester = Requester::new(http_client, base_url, token)?;
        Ok(Self { requester })
    }

    #[must_use]
    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    #[must_use]
    pub fn course(&self, course_id: u64) -> CourseHandle<'_> {
        CourseHandle::new(&self.requester, course_id)
    }

    pub async fn get_course(&self, course_id: u64) -> Result<Course> {
        self.course(course_id).get().await
    }

    pub async fn get_course_by_sis_id(&self, sis_course_id: &str) -> Result<Course> {
        self.requester
            .get(&format!(
                "courses/{}",
                qualified_id(sis_course_id, Some("sis_course_id"))
            ))
            .await
    }

    /// Lists the courses of the current user.
    pub fn get_courses(&self) -> PaginatedList<Course> {
        PaginatedList::new::<()>(&self.requester, Method::GET, "courses", None)
    }

    /// Fetches a user.
    ///
    /// `user` may be `"self"` for the current user. `id_type` selects an
    /// alternative id such as `sis_login_id`.
    pub async fn get_user(&self, user: impl Display, id_type: Option<&str>) -> Result<User> {
        self.requester
            .get(&format!("users/{}", qualified_id(user, id_type)))
            .await
    }

    pub async fn get_current_user(&self) -> Result<User> {
        self.get_user("self", None).await
    }

    #[must_use]
    pub fn section(&self, section_id: u64) -> SectionHandle<'_> {
        SectionHandle::new(&self.requester, section_id)
    }

    pub async fn get_section(&self, section_id: u64) -> Result<Section> {
        self.section(section_id).get().await
    }

    pub async fn get_course_nickname(&self, course_id: u64) -> Result<CourseNickname> {
        self.requester
            .get(&format!("users/self/course_nicknames/{course_id}"))
            .await
    }

    pub fn get_course_nicknames(&self) -> PaginatedList<CourseNickname> {
        PaginatedList::new::<()>(
            &self.requester,
            Method::GET,
            "users/self/course_nicknames",
            None,
        )
    }

    pub async fn set_course_nickname(
        &self,
        course_id: u64,
        nickname: &str,
    ) -> Result<CourseNickname> {
        #[derive(Serialize)]
        struct Params<'a> {
            nickname: &'a str,
        }

        self.requester
            .call(
                Method::PUT,
                &format!("users/self/course_nicknames/{course_id}"),
                Some(&Params { nickname }),
            )
            .await
    }

    /// Removes the nickname of a course and returns it.
    pub async fn remove_course_nickname(&self, course_id: u64) -> Result<CourseNickname> {
        self.requester
            .call::<_, ()>(
                Method::DELETE,
                &format!("users/self/course_nicknames/{course_id}"),
                None,
            )
            .await
    }

    /// Removes all course nicknames of the current user.
    pub async fn clear_course_nicknames(&self) -> Result<bool> {
        #[derive(Deserialize)]
        struct Response {
            message: String,
        }

        let Response { message } = self
            .requester
            .call::<_, ()>(Method::DELETE, "users/self/course_nicknames", None)
            .await?;
        Ok(message == "OK")
    }
}

impl CourseNickname {
    /// Removes this nickname and returns it.
    pub async fn remove(&self, canvas: &Canvas) -> Result<CourseNickname> {
        canvas.remove_course_nickname(self.course_id).await
    }
}
