//! Register command implementation.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use jobboard_core::traits::SessionGateway;
use jobboard_core::{RecruiterRegistration, StudentRegistration};

use crate::app::App;
use crate::config::Config;
use crate::output;

use super::print_user;

#[derive(Args, Debug)]
pub struct RegisterCommand {
    #[command(subcommand)]
    pub command: RegisterSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RegisterSubcommand {
    /// Register as a student
    Student(StudentArgs),

    /// Register as a recruiter
    Recruiter(RecruiterArgs),
}

#[derive(Args, Debug)]
pub struct StudentArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// At least 8 characters with a digit, lower and upper case letters and a symbol
    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub institution: String,

    #[arg(long)]
    pub graduation_year: u16,

    #[arg(long)]
    pub major: String,

    /// Comma separated
    #[arg(long)]
    pub skills: String,

    #[arg(long)]
    pub linkedin: Option<String>,

    #[arg(long)]
    pub portfolio: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecruiterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// At least 8 characters with a digit, lower and upper case letters and a symbol
    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub company: String,

    #[arg(long)]
    pub job_title: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub website: Option<String>,

    /// Company logo URL
    #[arg(long)]
    pub logo: Option<String>,
}

pub async fn handle(cmd: RegisterCommand, config: &Config) -> Result<()> {
    let app = App::open(config).await?;

    let user = match cmd.command {
        RegisterSubcommand::Student(args) => {
            let form = StudentRegistration {
                full_name: args.name,
                email: args.email,
                confirm_password: args.password.clone(),
                password: args.password,
                institution: args.institution,
                graduation_year: args.graduation_year,
                major: args.major,
                skills: args.skills,
                linked_in: args.linkedin,
                portfolio: args.portfolio,
            };
            form.validate().context("Invalid registration")?;
            app.sessions
                .register_student(form)
                .await
                .context("Failed to register")?
        }
        RegisterSubcommand::Recruiter(args) => {
            let form = RecruiterRegistration {
                full_name: args.name,
                email: args.email,
                confirm_password: args.password.clone(),
                password: args.password,
                company_name: args.company,
                job_title: args.job_title,
                phone_number: args.phone,
                company_website: args.website,
                company_logo: args.logo,
            };
            form.validate().context("Invalid registration")?;
            app.sessions
                .register_recruiter(form)
                .await
                .context("Failed to register")?
        }
    };

    output::success("Registered and logged in");
    println!();
    print_user(&user);

    Ok(())
}
