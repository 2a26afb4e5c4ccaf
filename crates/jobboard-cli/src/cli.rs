//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{
    applications::ApplicationsArgs, apply::ApplyArgs, jobs::JobsCommand, login::LoginArgs,
    logout::LogoutArgs, register::RegisterCommand, upload_resume::UploadResumeArgs,
    whoami::WhoamiArgs,
};

/// Job board CLI: register, browse jobs, post and apply.
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(author, version = env!("JOBBOARD_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Storage and runtime options. Flags override environment variables.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Directory holding the job board data [env: JOBBOARD_DATA_DIR]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fixture directory or http(s) URL to seed from [env: JOBBOARD_FIXTURES]
    #[arg(long, global = true)]
    pub fixtures: Option<String>,

    /// Skip the simulated network delays [env: JOBBOARD_LATENCY=off]
    #[arg(long, global = true)]
    pub no_latency: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a student or recruiter account and log in
    Register(RegisterCommand),

    /// Log in with email and password
    Login(LoginArgs),

    /// End the active session
    Logout(LogoutArgs),

    /// Display the active session
    Whoami(WhoamiArgs),

    /// Browse and post jobs
    Jobs(JobsCommand),

    /// Apply for a job (students only)
    Apply(ApplyArgs),

    /// List your applications
    Applications(ApplicationsArgs),

    /// Check and upload a resume
    UploadResume(UploadResumeArgs),
}
