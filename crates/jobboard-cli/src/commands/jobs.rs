//! Jobs subcommand implementations.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Subcommand};
use colored::Colorize;

use jobboard_core::traits::JobCatalog;
use jobboard_core::{Job, JobId, JobPosting, RecruiterContext, Role};

use crate::app::App;
use crate::config::Config;
use crate::output;

use super::read_json;

#[derive(Args, Debug)]
pub struct JobsCommand {
    #[command(subcommand)]
    pub command: JobsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JobsSubcommand {
    /// List all jobs
    List(ListArgs),

    /// Show a single job
    Show(ShowArgs),

    /// Post a job (recruiters only)
    Post(PostArgs),

    /// List job categories
    Categories(CategoriesArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub id: JobId,

    /// Print the job as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PostArgs {
    /// JSON file with the posting form (use - for stdin)
    #[arg(long)]
    pub json: String,
}

#[derive(Args, Debug)]
pub struct CategoriesArgs {}

pub async fn handle(cmd: JobsCommand, config: &Config) -> Result<()> {
    let app = App::open(config).await?;

    match cmd.command {
        JobsSubcommand::List(args) => list(&app, args).await,
        JobsSubcommand::Show(args) => show(&app, args).await,
        JobsSubcommand::Post(args) => post(&app, args).await,
        JobsSubcommand::Categories(_) => categories(&app).await,
    }
}

fn summary(job: &Job) -> String {
    format!(
        "{}  {} @ {} ({}, {}, {})",
        job.id.to_string().bold(),
        job.job_title,
        job.company_name,
        job.location,
        job.remote_or_onsite,
        job.fulltime_or_parttime
    )
}

async fn list(app: &App, args: ListArgs) -> Result<()> {
    let jobs = app.catalog.all_jobs().await.context("Failed to list jobs")?;

    if jobs.is_empty() {
        eprintln!("{}", "No jobs found.".dimmed());
        return Ok(());
    }

    for job in &jobs {
        if args.json {
            output::json(job)?;
        } else {
            println!("{}", summary(job));
        }
    }

    Ok(())
}

async fn show(app: &App, args: ShowArgs) -> Result<()> {
    let job = app
        .catalog
        .job(args.id)
        .await
        .context("Failed to load job")?
        .with_context(|| format!("No job with id {}", args.id))?;

    if args.json {
        return output::json_pretty(&job);
    }

    output::field("ID", &job.id.to_string());
    output::field("Title", &job.job_title);
    output::field("Company", &job.company_name);
    output::field("Location", &job.location);
    output::field(
        "Type",
        &format!("{}, {}", job.remote_or_onsite, job.fulltime_or_parttime),
    );
    output::field("Salary", &job.salary);
    output::field("Experience", &job.experiences);
    output::field("Education", &job.educational_requirements);
    output::field(
        "Contact",
        &format!(
            "{} / {}",
            job.contact_information.email, job.contact_information.phone
        ),
    );
    println!();
    println!("{}", job.job_description);
    println!();
    println!("{}", job.job_responsibility);

    Ok(())
}

async fn post(app: &App, args: PostArgs) -> Result<()> {
    let user = app.require_role(Role::Recruiter).await?;
    let recruiter = RecruiterContext::from_session(&user)?;

    let posting: JobPosting = read_json(&args.json)?;
    posting
        .validate(Local::now().date_naive())
        .context("Invalid job posting")?;

    let job = app
        .catalog
        .add_job(&posting, &recruiter)
        .await
        .context("Failed to post job")?;

    output::success(&format!("Posted job {}", job.id));
    println!("{}", summary(&job));

    Ok(())
}

async fn categories(app: &App) -> Result<()> {
    let categories = app
        .catalog
        .categories()
        .await
        .context("Failed to load categories")?;

    for category in &categories {
        output::field(&category.category_name, &category.availability);
    }

    Ok(())
}
