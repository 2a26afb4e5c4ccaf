//! Runtime configuration from flags, environment and defaults.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use url::Url;

use jobboard_local::Latency;

use crate::cli::GlobalArgs;

pub const DATA_DIR_ENV: &str = "JOBBOARD_DATA_DIR";
pub const FIXTURES_ENV: &str = "JOBBOARD_FIXTURES";
pub const LATENCY_ENV: &str = "JOBBOARD_LATENCY";
pub const HASH_COST_ENV: &str = "JOBBOARD_HASH_COST";

/// Where seed fixtures come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSetting {
    /// The copies compiled into the binary.
    Embedded,
    Dir(PathBuf),
    Http(Url),
}

impl FixtureSetting {
    fn parse(value: &str) -> Result<Self> {
        if value.starts_with("http://") || value.starts_with("https://") {
            let url = Url::parse(value).context("Invalid fixture URL")?;
            Ok(FixtureSetting::Http(url))
        } else {
            Ok(FixtureSetting::Dir(PathBuf::from(value)))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub fixtures: FixtureSetting,
    pub latency: Latency,
    pub hash_cost: u32,
}

impl Config {
    /// Resolve against the process environment.
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        Self::from_sources(args, |name| std::env::var(name).ok())
    }

    /// Flags win over `env`, which wins over defaults.
    pub fn from_sources(args: &GlobalArgs, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match args.data_dir.clone().or_else(|| env(DATA_DIR_ENV).map(PathBuf::from)) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        let fixtures = match args.fixtures.clone().or_else(|| env(FIXTURES_ENV)) {
            Some(value) => FixtureSetting::parse(&value)?,
            None => FixtureSetting::Embedded,
        };

        let latency = if args.no_latency {
            Latency::none()
        } else {
            match env(LATENCY_ENV).as_deref() {
                None | Some("on") => Latency::simulated(),
                Some("off") => Latency::none(),
                Some(other) => bail!("{} must be 'on' or 'off', got '{}'", LATENCY_ENV, other),
            }
        };

        let hash_cost = match env(HASH_COST_ENV) {
            Some(value) => value
                .parse::<u32>()
                .with_context(|| format!("Invalid {}", HASH_COST_ENV))?,
            None => jobboard_local::DEFAULT_HASH_COST,
        };

        Ok(Self {
            data_dir,
            fixtures,
            latency,
            hash_cost,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "jobboard").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
