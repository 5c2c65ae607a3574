use canvas_api::PaginatedList;
use futures_util::TryStreamExt;

use crate::util::{or_dash, Connection};

async fn print_all<T>(
    mut list: PaginatedList<T>,
    mut line: impl FnMut(&T) -> String,
) -> anyhow::Result<()> {
    while let Some(item) = list.try_next().await? {
        println!("{}", line(&item));
    }
    Ok(())
}

/// Lists the courses of the current user.
#[derive(Debug, clap::Args)]
pub struct Courses {
    #[command(flatten)]
    connection: Connection,
}

impl Courses {
    pub async fn run(self) -> anyhow::Result<()> {
        let canvas = self.connection.connect().await?;
        print_all(canvas.get_courses(), ToString::to_string).await
    }
}

/// Shows a single course.
#[derive(Debug, clap::Args)]
pub struct Course {
    /// The id of the course.
    id: u64,
    #[command(flatten)]
    connection: Connection,
}

impl Course {
    pub async fn run(self) -> anyhow::Result<()> {
        let canvas = self.connection.connect().await?;
        let course = canvas.get_course(self.id).await?;
        println!("{course}");
        println!("code:     {}", or_dash(course.course_code.as_deref()));
        println!("sis id:   {}", or_dash(course.sis_course_id.as_deref()));
        if let Some(workflow_state) = course.workflow_state {
            println!("state:    {workflow_state:?}");
        }
        if let Some(start_at) = course.start_at {
            println!("start:    {start_at}");
        }
        if let Some(end_at) = course.end_at {
            println!("end:      {end_at}");
        }
        if let Some(total_students) = course.total_students {
            println!("students: {total_students}");
        }
        Ok(())
    }
}

/// Resources of a course that can be listed.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Quizzes,
    Modules,
    Assignments,
    Pages,
    Users,
}

/// Lists resources of a course.
#[derive(Debug, clap::Args)]
pub struct Listing {
    /// The id of the course.
    course_id: u64,
    #[command(flatten)]
    connection: Connection,
}

impl Listing {
    pub async fn run(self, kind: Kind) -> anyhow::Result<()> {
        let canvas = self.connection.connect().await?;
        let course = canvas.course(self.course_id);
        match kind {
            Kind::Quizzes => {
                print_all(course.get_quizzes(), |quiz| {
                    format!("{}\t{}", quiz.id, or_dash(quiz.title.as_deref()))
                })
                .await
            }
            Kind::Modules => {
                print_all(course.get_modules(), |module| {
                    format!("{}\t{}", module.id, or_dash(module.name.as_deref()))
                })
                .await
            }
            Kind::Assignments => {
                print_all(course.get_assignments(), |assignment| {
                    format!(
                        "{}\t{}",
                        assignment.id,
                        or_dash(assignment.name.as_deref())
                    )
                })
                .await
            }
            Kind::Pages => {
                print_all(course.get_pages(), |page| {
                    format!("{}\t{}", page.url, or_dash(page.title.as_deref()))
                })
                .await
            }
            Kind::Users => print_all(course.get_users(), ToString::to_string).await,
        }
    }
}
