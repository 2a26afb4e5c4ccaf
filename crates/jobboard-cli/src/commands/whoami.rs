//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::config::Config;

use super::print_user;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, config: &Config) -> Result<()> {
    let app = App::open(config).await?;
    let user = app.require_user().await?;

    print_user(&user);

    Ok(())
}
