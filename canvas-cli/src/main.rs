//! Canvas LMS command line client.

#![warn(rust_2018_idioms)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![deny(rustdoc::all)]

mod add;
mod config;
mod list;
mod util;

use std::env;

use clap::Parser;
use human_panic::setup_panic;
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(name = "canvas", author, about)]
enum Subcommand {
    Add(add::Subcommand),
    Config(config::Subcommand),
    Courses(list::Courses),
    Course(list::Course),
    /// Lists the quizzes of a course.
    Quizzes(list::Listing),
    /// Lists the modules of a course.
    Modules(list::Listing),
    /// Lists the assignments of a course.
    Assignments(list::Listing),
    /// Lists the wiki pages of a course.
    Pages(list::Listing),
    /// Lists the users of a course.
    Users(list::Listing),
}

impl Subcommand {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            Subcommand::Add(command) => command.run().await,
            Subcommand::Config(command) => command.run().await,
            Subcommand::Courses(command) => command.run().await,
            Subcommand::Course(command) => command.run().await,
            Subcommand::Quizzes(command) => command.run(list::Kind::Quizzes).await,
            Subcommand::Modules(command) => command.run(list::Kind::Modules).await,
            Subcommand::Assignments(command) => command.run(list::Kind::Assignments).await,
            Subcommand::Pages(command) => command.run(list::Kind::Pages).await,
            Subcommand::Users(command) => command.run(list::Kind::Users).await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt = tracing_subscriber::fmt();
    if env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        fmt.with_env_filter(EnvFilter::try_from_default_env()?)
            .init();
    } else {
        fmt.init();
    }
    setup_panic!();

    Subcommand::parse().run().await
}
