//! Operations on single resources inside a course, and on sections.

use reqwest::Method;
use serde::Serialize;

use crate::{
    course::CourseScoped,
    error::Result,
    params::{AssignmentParams, ModuleParams, PageParams, QuizParams, SectionParams},
    requester::{escape_segment, Requester},
    response::{assignment::Assignment, module::Module, page::Page, quiz::Quiz, section::Section},
};

#[derive(Debug, Clone, Copy)]
pub struct QuizHandle<'a> {
    requester: &'a Requester,
    course_id: u64,
    id: u64,
}

impl<'a> QuizHandle<'a> {
    pub(crate) fn new(requester: &'a Requester, course_id: u64, id: u64) -> Self {
        Self {
            requester,
            course_id,
            id,
        }
    }

    fn path(&self) -> String {
        format!("courses/{}/quizzes/{}", self.course_id, self.id)
    }

    async fn call<P>(&self, method: Method, params: Option<&P>) -> Result<Quiz>
    where
        P: Serialize + ?Sized,
    {
        let mut quiz: Quiz = self.requester.call(method, &self.path(), params).await?;
        quiz.set_course_id(self.course_id);
        Ok(quiz)
    }

    pub async fn get(&self) -> Result<Quiz> {
        self.call::<()>(Method::GET, None).await
    }

    pub async fn edit(&self, quiz: &QuizParams) -> Result<Quiz> {
        #[derive(Serialize)]
        struct Params<'a> {
            quiz: &'a QuizParams,
        }

        self.call(Method::PUT, Some(&Params { quiz })).await
    }

    /// Deletes the quiz and returns its last state.
    pub async fn delete(&self) -> Result<Quiz> {
        self.call::<()>(Method::DELETE, None).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModuleHandle<'a> {
    requester: &'a Requester,
    course_id: u64,
    id: u64,
}

impl<'a> ModuleHandle<'a> {
    pub(crate) fn new(requester: &'a Requester, course_id: u64, id: u64) -> Self {
        Self {
            requester,
            course_id,
            id,
        }
    }

    fn path(&self) -> String {
        format!("courses/{}/modules/{}", self.course_id, self.id)
    }

    async fn call<P>(&self, method: Method, params: Option<&P>) -> Result<Module>
    where
        P: Serialize + ?Sized,
    {
        let mut module: Module = self.requester.call(method, &self.path(), params).await?;
        module.set_course_id(self.course_id);
        Ok(module)
    }

    pub async fn get(&self) -> Result<Module> {
        self.call::<()>(Method::GET, None).await
    }

    pub async fn edit(&self, module: &ModuleParams) -> Result<Module> {
        #[derive(Serialize)]
        struct Params<'a> {
            module: &'a ModuleParams,
        }

        self.call(Method::PUT, Some(&Params { module })).await
    }

    pub async fn delete(&self) -> Result<Module> {
        self.call::<()>(Method::DELETE, None).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssignmentHandle<'a> {
    requester: &'a Requester,
    course_id: u64,
    id: u64,
}

impl<'a> AssignmentHandle<'a> {
    pub(crate) fn new(requester: &'a Requester, course_id: u64, id: u64) -> Self {
        Self {
            requester,
            course_id,
            id,
        }
    }

    fn path(&self) -> String {
        format!("courses/{}/assignments/{}", self.course_id, self.id)
    }

    pub async fn get(&self) -> Result<Assignment> {
        self.requester.get(&self.path()).await
    }

    pub async fn edit(&self, assignment: &AssignmentParams) -> Result<Assignment> {
        #[derive(Serialize)]
        struct Params<'a> {
            assignment: &'a AssignmentParams,
        }

        self.requester
            .call(Method::PUT, &self.path(), Some(&Params { assignment }))
            .await
    }

    pub async fn delete(&self) -> Result<Assignment> {
        self.requester
            .call::<_, ()>(Method::DELETE, &self.path(), None)
            .await
    }
}

/// A wiki page, addressed by its url slug.
#[derive(Debug, Clone)]
pub struct PageHandle<'a> {
    requester: &'a Requester,
    course_id: u64,
    url: String,
}

impl<'a> PageHandle<'a> {
    pub(crate) fn new(requester: &'a Requester, course_id: u64, url: &str) -> Self {
        Self {
            requester,
            course_id,
            url: url.to_string(),
        }
    }

    fn path(&self) -> String {
        format!(
            "courses/{}/pages/{}",
            self.course_id,
            escape_segment(&self.url)
        )
    }

    async fn call<P>(&self, method: Method, params: Option<&P>) -> Result<Page>
    where
        P: Serialize + ?Sized,
    {
        let mut page: Page = self.requester.call(method, &self.path(), params).await?;
        page.set_course_id(self.course_id);
        Ok(page)
    }

    pub async fn get(&self) -> Result<Page> {
        self.call::<()>(Method::GET, None).await
    }

    /// Updates the page. Unlike creation, no field is required.
    pub async fn edit(&self, wiki_page: &PageParams) -> Result<Page> {
        #[derive(Serialize)]
        struct Params<'a> {
            wiki_page: &'a PageParams,
        }

        self.call(Method::PUT, Some(&Params { wiki_page })).await
    }

    pub async fn delete(&self) -> Result<Page> {
        self.call::<()>(Method::DELETE, None).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionHandle<'a> {
    requester: &'a Requester,
    id: u64,
}

impl<'a> SectionHandle<'a> {
    pub(crate) fn new(requester: &'a Requester, id: u64) -> Self {
        Self { requester, id }
    }

    fn path(&self) -> String {
        format!("sections/{}", self.id)
    }

    pub async fn get(&self) -> Result<Section> {
        self.requester.get(&self.path()).await
    }

    pub async fn edit(&self, course_section: &SectionParams) -> Result<Section> {
        #[derive(Serialize)]
        struct Params<'a> {
            course_section: &'a SectionParams,
        }

        self.requester
            .call(Method::PUT, &self.path(), Some(&Params { course_section }))
            .await
    }

    pub async fn delete(&self) -> Result<Section> {
        self.requester
            .call::<_, ()>(Method::DELETE, &self.path(), None)
            .await
    }
}
