//! Applications command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use jobboard_core::traits::ApplicationGateway;
use jobboard_core::ApplicationStatus;

use crate::app::App;
use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct ApplicationsArgs {
    /// Only show applications with this status (pending, accepted, rejected)
    #[arg(long)]
    pub status: Option<ApplicationStatus>,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ApplicationsArgs, config: &Config) -> Result<()> {
    let app = App::open(config).await?;
    let user = app.require_user().await?;

    let applications = app
        .applications
        .applications_for(user.id, args.status)
        .await
        .context("Failed to list applications")?;

    if applications.is_empty() {
        eprintln!("{}", "No applications found.".dimmed());
        return Ok(());
    }

    for application in &applications {
        if args.json {
            output::json(application)?;
        } else {
            println!(
                "{}  job {}  {} @ {}  [{}]  {}",
                application.id.as_str().bold(),
                application.job_id,
                application.job_title.as_deref().unwrap_or("-"),
                application.company_name.as_deref().unwrap_or("-"),
                application.status,
                application.application_date.format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}
