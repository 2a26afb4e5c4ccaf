//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use jobboard_core::Credentials;
use jobboard_core::traits::SessionGateway;

use crate::app::App;
use crate::config::Config;
use crate::output;

use super::print_user;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, config: &Config) -> Result<()> {
    let app = App::open(config).await?;
    let credentials = Credentials::new(args.email, args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let user = app
        .sessions
        .login(credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    print_user(&user);

    Ok(())
}
