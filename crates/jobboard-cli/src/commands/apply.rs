//! Apply command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use jobboard_core::traits::{ApplicationGateway, JobCatalog};
use jobboard_core::{ApplicationForm, JobId, NewApplication, Role};

use crate::app::App;
use crate::config::Config;
use crate::output;

use super::{read_json, read_resume};

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Job to apply for
    pub job_id: JobId,

    /// JSON file with the application form (use - for stdin)
    #[arg(long)]
    pub json: String,

    /// PDF or Word resume to attach
    #[arg(long)]
    pub resume: Option<PathBuf>,
}

pub async fn run(args: ApplyArgs, config: &Config) -> Result<()> {
    let app = App::open(config).await?;
    let user = app.require_role(Role::Student).await?;

    let job = app
        .catalog
        .job(args.job_id)
        .await
        .context("Failed to load job")?
        .with_context(|| format!("No job with id {}", args.job_id))?;

    let form: ApplicationForm = read_json(&args.json)?;
    form.validate().context("Invalid application")?;

    let resume = match &args.resume {
        Some(path) => {
            let file = read_resume(path)?;
            eprintln!("{}", "Uploading resume...".dimmed());
            Some(
                app.applications
                    .upload_resume(file)
                    .await
                    .context("Failed to upload resume")?,
            )
        }
        None => None,
    };

    eprintln!("{}", "Submitting application...".dimmed());
    let ack = app
        .applications
        .submit_application(NewApplication {
            job_id: job.id,
            user_id: user.id,
            user_name: user.name,
            job_title: Some(job.job_title),
            company_name: Some(job.company_name),
            form,
            resume,
        })
        .await
        .context("Failed to submit application")?;

    output::success(&ack.message);
    output::field("Application", ack.application_id.as_str());

    Ok(())
}
