//! Command-line arguments shared by both tools.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::logging::{init_logging, LogOptions};
use crate::settings::{load_settings, Settings};

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Target directory [default: mount]
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Settings file (TOML). Defaults to the per-user settings file if present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed the random generator for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    /// Load settings and apply the flags on top.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = load_settings(self.config.as_deref()).context("loading settings")?;
        if let Some(dir) = &self.dir {
            settings.target_dir = dir.clone();
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }

    pub fn init_logging(
        &self,
        settings: &Settings,
        component: &'static str,
    ) -> anyhow::Result<Option<WorkerGuard>> {
        init_logging(&LogOptions {
            filter: settings.log_filter.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
            log_dir: settings.log_dir.clone(),
            component,
        })
    }
}

/// Seeded rng when a seed is configured, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => {
            debug!(seed = s, "using fixed seed");
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_os_rng(),
    }
}
