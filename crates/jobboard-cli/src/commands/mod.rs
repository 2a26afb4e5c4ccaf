//! Subcommand implementations.

pub mod applications;
pub mod apply;
pub mod jobs;
pub mod login;
pub mod logout;
pub mod register;
pub mod upload_resume;
pub mod whoami;

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use jobboard_core::{ResumeFile, SessionUser};

use crate::cli::Commands;
use crate::config::Config;
use crate::output;

pub async fn handle(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Register(cmd) => register::handle(cmd, config).await,
        Commands::Login(args) => login::run(args, config).await,
        Commands::Logout(args) => logout::run(args, config).await,
        Commands::Whoami(args) => whoami::run(args, config).await,
        Commands::Jobs(cmd) => jobs::handle(cmd, config).await,
        Commands::Apply(args) => apply::run(args, config).await,
        Commands::Applications(args) => applications::run(args, config).await,
        Commands::UploadResume(args) => upload_resume::run(args, config).await,
    }
}

/// Read a JSON document from a file, or from stdin when `path` is `-`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        serde_json::from_str(&buf).context("Invalid JSON from stdin")
    } else {
        let content = std::fs::read_to_string(path).context("Failed to read JSON file")?;
        serde_json::from_str(&content).context("Invalid JSON in file")
    }
}

/// Load a resume from disk, guessing its content type from the extension.
pub(crate) fn read_resume(path: &Path) -> Result<ResumeFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read resume '{}'", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("Resume path has no file name")?
        .to_string();
    let content_type = ResumeFile::content_type_for(&file_name);
    Ok(ResumeFile::new(file_name, content_type, bytes))
}

pub(crate) fn print_user(user: &SessionUser) {
    output::field("ID", &user.id.to_string());
    output::field("Name", &user.name);
    output::field("Email", user.email.as_str());
    output::field("Role", user.role.as_str());
    output::optional_field("Company", user.company_name.as_deref());
    output::optional_field("Phone", user.phone_number.as_deref());
}
