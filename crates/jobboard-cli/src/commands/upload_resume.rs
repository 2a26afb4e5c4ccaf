//! Upload resume command implementation.
//!
//! Resume handles only live as long as the process, so this mostly serves to
//! check a file against the upload limits before applying with `--resume`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use jobboard_core::traits::ApplicationGateway;

use crate::app::App;
use crate::config::Config;
use crate::output;

use super::read_resume;

#[derive(Args, Debug)]
pub struct UploadResumeArgs {
    /// PDF or Word document, at most 10MB
    pub path: PathBuf,
}

pub async fn run(args: UploadResumeArgs, config: &Config) -> Result<()> {
    let app = App::open(config).await?;
    let file = read_resume(&args.path)?;
    let size = file.size();

    let resume = app
        .applications
        .upload_resume(file)
        .await
        .context("Failed to upload resume")?;

    output::success("Resume accepted");
    output::field("File", &resume.file_name);
    output::field("Size", &format!("{} bytes", size));
    output::field("Handle", &resume.url);

    Ok(())
}
