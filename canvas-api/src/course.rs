//! Operations on a single course.

use std::fmt::Display;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    canvas::qualified_id,
    error::Result,
    pagination::PaginatedList,
    params::{
        AssignmentParams, CourseParams, CourseSettings, DiscussionTopicParams, EnrollmentParams,
        GroupCategoryParams, ModuleParams, PageParams, QuizParams, SectionParams,
    },
    requester::Requester,
    resource::{AssignmentHandle, ModuleHandle, PageHandle, QuizHandle},
    response::{
        assignment::Assignment,
        course::Course,
        discussion_topic::DiscussionTopic,
        enrollment::Enrollment,
        external_tool::ExternalTool,
        group::{Group, GroupCategory},
        module::Module,
        page::Page,
        quiz::Quiz,
        section::Section,
        user::User,
    },
    serde::CommaSeparated,
};

/// Resources that Canvas returns without a reference to their course.
pub(crate) trait CourseScoped {
    fn set_course_id(&mut self, course_id: u64);
}

macro_rules! course_scoped {
    ($($ty:ty),*) => {
        $(
            impl CourseScoped for $ty {
                fn set_course_id(&mut self, course_id: u64) {
                    self.course_id = Some(course_id);
                }
            }
        )*
    };
}

course_scoped!(Quiz, Module, Page, DiscussionTopic);

/// A course, addressed by id.
///
/// Creating a handle does not contact Canvas. Use [`CourseHandle::get`] to
/// fetch the course itself.
#[derive(Debug, Clone, Copy)]
pub struct CourseHandle<'a> {
    requester: &'a Requester,
    id: u64,
}

#[derive(Deserialize)]
struct Conclude {
    conclude: bool,
}

#[derive(Deserialize)]
struct Delete {
    delete: bool,
}

#[derive(Deserialize)]
struct Html {
    html: String,
}

impl<'a> CourseHandle<'a> {
    pub(crate) fn new(requester: &'a Requester, id: u64) -> Self {
        Self { requester, id }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    fn path(&self, tail: impl Display) -> String {
        format!("courses/{}/{}", self.id, tail)
    }

    fn scoped<T: CourseScoped>(&self, mut resource: T) -> T {
        resource.set_course_id(self.id);
        resource
    }

    fn scoped_list<T>(&self, list: PaginatedList<T>) -> PaginatedList<T>
    where
        T: CourseScoped + serde::de::DeserializeOwned + Send + 'static,
    {
        let id = self.id;
        list.inspect_items(move |resource| resource.set_course_id(id))
    }

    fn list<T>(&self, tail: &str) -> PaginatedList<T>
    where
        T: serde::de::DeserializeOwned + Send + 'static,
    {
        PaginatedList::new::<()>(self.requester, Method::GET, &self.path(tail), None)
    }

    pub async fn get(&self) -> Result<Course> {
        self.requester.get(&format!("courses/{}", self.id)).await
    }

    /// Marks the course as concluded.
    pub async fn conclude(&self) -> Result<bool> {
        let Conclude { conclude } = self
            .requester
            .call(
                Method::DELETE,
                &format!("courses/{}", self.id),
                Some(&[("event", "conclude")]),
            )
            .await?;
        Ok(conclude)
    }

    /// Permanently deletes the course.
    pub async fn delete(&self) -> Result<bool> {
        let Delete { delete } = self
            .requester
            .call(
                Method::DELETE,
                &format!("courses/{}", self.id),
                Some(&[("event", "delete")]),
            )
            .await?;
        Ok(delete)
    }

    pub async fn update(&self, course: &CourseParams) -> Result<Course> {
        #[derive(Serialize)]
        struct Params<'a> {
            course: &'a CourseParams,
        }

        self.requester
            .call(
                Method::PUT,
                &format!("courses/{}", self.id),
                Some(&Params { course }),
            )
            .await
    }

    /// Fetches a user enrolled in this course.
    ///
    /// `id_type` selects an alternative id such as `sis_login_id`.
    pub async fn get_user(&self, user: impl Display, id_type: Option<&str>) -> Result<User> {
        let path = self.path(format_args!("users/{}", qualified_id(user, id_type)));
        self.requester.get(&path).await
    }

    pub fn get_users(&self) -> PaginatedList<User> {
        self.list("users")
    }

    pub fn get_recent_students(&self) -> PaginatedList<User> {
        self.list("recent_students")
    }

    /// Enrolls a user with an enrollment type such as `StudentEnrollment`.
    pub async fn enroll_user(
        &self,
        user_id: u64,
        enrollment_type: &str,
        enrollment: &EnrollmentParams,
    ) -> Result<Enrollment> {
        #[derive(Serialize)]
        struct EnrollmentBody<'a> {
            user_id: u64,
            #[serde(rename = "type")]
            ty: &'a str,
            #[serde(flatten)]
            params: &'a EnrollmentParams,
        }

        #[derive(Serialize)]
        struct Params<'a> {
            enrollment: EnrollmentBody<'a>,
        }

        self.requester
            .call(
                Method::POST,
                &self.path("enrollments"),
                Some(&Params {
                    enrollment: EnrollmentBody {
                        user_id,
                        ty: enrollment_type,
                        params: enrollment,
                    },
                }),
            )
            .await
    }

    pub fn get_enrollments(&self) -> PaginatedList<Enrollment> {
        self.list("enrollments")
    }

    /// Renders HTML the way Canvas would display it in this course.
    ///
    /// Canvas sanitizes the HTML, so the result may differ from the input.
    pub async fn preview_html(&self, html: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Params<'a> {
            html: &'a str,
        }

        let Html { html } = self
            .requester
            .call(Method::POST, &self.path("preview_html"), Some(&Params { html }))
            .await?;
        Ok(html)
    }

    pub async fn get_settings(&self) -> Result<CourseSettings> {
        self.requester.get(&self.path("settings")).await
    }

    pub async fn update_settings(&self, settings: &CourseSettings) -> Result<CourseSettings> {
        self.requester
            .call(Method::PUT, &self.path("settings"), Some(settings))
            .await
    }

    /// Deletes all content of the course.
    ///
    /// Canvas creates a fresh course with the same settings, which is
    /// returned. Its id differs from the original one.
    pub async fn reset(&self) -> Result<Course> {
        self.requester
            .call::<_, ()>(Method::POST, &self.path("reset_content"), None)
            .await
    }

    #[must_use]
    pub fn quiz(&self, quiz_id: u64) -> QuizHandle<'a> {
        QuizHandle::new(self.requester, self.id, quiz_id)
    }

    pub async fn create_quiz(&self, quiz: &QuizParams) -> Result<Quiz> {
        #[derive(Serialize)]
        struct Params<'a> {
            quiz: &'a QuizParams,
        }

        let created = self
            .requester
            .call_validated(Method::POST, &self.path("quizzes"), quiz, &Params { quiz })
            .await?;
        Ok(self.scoped(created))
    }

    pub async fn get_quiz(&self, quiz_id: u64) -> Result<Quiz> {
        self.quiz(quiz_id).get().await
    }

    pub fn get_quizzes(&self) -> PaginatedList<Quiz> {
        self.scoped_list(self.list("quizzes"))
    }

    #[must_use]
    pub fn module(&self, module_id: u64) -> ModuleHandle<'a> {
        ModuleHandle::new(self.requester, self.id, module_id)
    }

    pub async fn create_module(&self, module: &ModuleParams) -> Result<Module> {
        #[derive(Serialize)]
        struct Params<'a> {
            module: &'a ModuleParams,
        }

        let created = self
            .requester
            .call_validated(Method::POST, &self.path("modules"), module, &Params { module })
            .await?;
        Ok(self.scoped(created))
    }

    pub async fn get_module(&self, module_id: u64) -> Result<Module> {
        self.module(module_id).get().await
    }

    pub fn get_modules(&self) -> PaginatedList<Module> {
        self.scoped_list(self.list("modules"))
    }

    pub async fn get_section(&self, section_id: u64) -> Result<Section> {
        let path = self.path(format_args!("sections/{section_id}"));
        self.requester.get(&path).await
    }

    pub fn list_sections(&self) -> PaginatedList<Section> {
        self.list("sections")
    }

    pub async fn create_course_section(&self, course_section: &SectionParams) -> Result<Section> {
        #[derive(Serialize)]
        struct Params<'a> {
            course_section: &'a SectionParams,
        }

        self.requester
            .call(
                Method::POST,
                &self.path("sections"),
                Some(&Params { course_section }),
            )
            .await
    }

    #[must_use]
    pub fn assignment(&self, assignment_id: u64) -> AssignmentHandle<'a> {
        AssignmentHandle::new(self.requester, self.id, assignment_id)
    }

    pub async fn create_assignment(&self, assignment: &AssignmentParams) -> Result<Assignment> {
        #[derive(Serialize)]
        struct Params<'a> {
            assignment: &'a AssignmentParams,
        }

        self.requester
            .call_validated(
                Method::POST,
                &self.path("assignments"),
                assignment,
                &Params { assignment },
            )
            .await
    }

    pub async fn get_assignment(&self, assignment_id: u64) -> Result<Assignment> {
        self.assignment(assignment_id).get().await
    }

    pub fn get_assignments(&self) -> PaginatedList<Assignment> {
        self.list("assignments")
    }

    pub async fn show_front_page(&self) -> Result<Page> {
        let page = self.requester.get(&self.path("front_page")).await?;
        Ok(self.scoped(page))
    }

    /// Updates the front page, creating it if there is none yet.
    pub async fn edit_front_page(&self, wiki_page: &PageParams) -> Result<Page> {
        #[derive(Serialize)]
        struct Params<'a> {
            wiki_page: &'a PageParams,
        }

        let page = self
            .requester
            .call(Method::PUT, &self.path("front_page"), Some(&Params { wiki_page }))
            .await?;
        Ok(self.scoped(page))
    }

    #[must_use]
    pub fn page(&self, url: &str) -> PageHandle<'a> {
        PageHandle::new(self.requester, self.id, url)
    }

    pub async fn get_page(&self, url: &str) -> Result<Page> {
        self.page(url).get().await
    }

    pub fn get_pages(&self) -> PaginatedList<Page> {
        self.scoped_list(self.list("pages"))
    }

    pub async fn create_page(&self, wiki_page: &PageParams) -> Result<Page> {
        #[derive(Serialize)]
        struct Params<'a> {
            wiki_page: &'a PageParams,
        }

        let page = self
            .requester
            .call_validated(
                Method::POST,
                &self.path("pages"),
                wiki_page,
                &Params { wiki_page },
            )
            .await?;
        Ok(self.scoped(page))
    }

    pub async fn get_external_tool(&self, tool_id: u64) -> Result<ExternalTool> {
        let path = self.path(format_args!("external_tools/{tool_id}"));
        self.requester.get(&path).await
    }

    pub fn get_external_tools(&self) -> PaginatedList<ExternalTool> {
        self.list("external_tools")
    }

    pub fn list_groups(&self) -> PaginatedList<Group> {
        self.list("groups")
    }

    pub async fn create_group_category(
        &self,
        category: &GroupCategoryParams,
    ) -> Result<GroupCategory> {
        self.requester
            .call_validated(
                Method::POST,
                &self.path("group_categories"),
                category,
                category,
            )
            .await
    }

    pub fn list_group_categories(&self) -> PaginatedList<GroupCategory> {
        self.list("group_categories")
    }

    pub async fn get_discussion_topic(&self, topic_id: u64) -> Result<DiscussionTopic> {
        let path = self.path(format_args!("discussion_topics/{topic_id}"));
        let topic = self.requester.get(&path).await?;
        Ok(self.scoped(topic))
    }

    pub fn get_discussion_topics(&self) -> PaginatedList<DiscussionTopic> {
        self.scoped_list(self.list("discussion_topics"))
    }

    pub async fn create_discussion_topic(
        &self,
        topic: &DiscussionTopicParams,
    ) -> Result<DiscussionTopic> {
        let topic = self
            .requester
            .call(Method::POST, &self.path("discussion_topics"), Some(topic))
            .await?;
        Ok(self.scoped(topic))
    }

    pub async fn update_discussion_topic(
        &self,
        topic_id: u64,
        topic: &DiscussionTopicParams,
    ) -> Result<DiscussionTopic> {
        let path = self.path(format_args!("discussion_topics/{topic_id}"));
        let topic = self
            .requester
            .call(Method::PUT, &path, Some(topic))
            .await?;
        Ok(self.scoped(topic))
    }

    /// Puts the pinned discussion topics into the given order.
    pub fn reorder_pinned_topics(&self, order: &[u64]) -> PaginatedList<DiscussionTopic> {
        #[serde_as]
        #[derive(Serialize)]
        struct Params {
            #[serde_as(as = "CommaSeparated")]
            order: Vec<u64>,
        }

        self.scoped_list(PaginatedList::new(
            self.requester,
            Method::POST,
            &self.path("discussion_topics/reorder"),
            Some(&Params {
                order: order.to_vec(),
            }),
        ))
    }
}
