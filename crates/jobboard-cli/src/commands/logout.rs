//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use jobboard_core::traits::SessionGateway;

use crate::app::App;
use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, config: &Config) -> Result<()> {
    let app = App::open(config).await?;
    app.sessions.logout().await.context("Failed to logout")?;

    output::success("Logged out");
    Ok(())
}
