// delete_random.rs: shuffle the target directory and delete every STRIDE-th entry.
// Usage: cargo run --bin delete_random -- <STRIDE> [--dir mount] [--dry-run]

use std::num::NonZeroUsize;

use anyhow::{bail, Context};
use clap::Parser;

use mount_fixtures::cli::{make_rng, CommonArgs};
use mount_fixtures::pruner::{prune, OnError, PruneOptions};

#[derive(Debug, Parser)]
#[command(version, about = "Delete a random, evenly strided subset of the target directory")]
struct Cli {
    /// Delete every STRIDE-th entry of the shuffled listing
    stride: NonZeroUsize,

    /// Keep deleting when an entry cannot be removed
    #[arg(long)]
    keep_going: bool,

    /// Report what would be deleted without deleting it
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.common.settings()?;
    let _guard = cli.common.init_logging(&settings, "delete_random")?;

    let opts = PruneOptions {
        on_error: if cli.keep_going {
            OnError::Continue
        } else {
            settings.on_error
        },
        dry_run: cli.dry_run,
    };
    let mut rng = make_rng(settings.seed);
    let dir = &settings.target_dir;

    let report = prune(dir, cli.stride.get(), &mut rng, &opts)
        .with_context(|| format!("pruning {}", dir.display()))?;

    if opts.dry_run {
        for p in &report.selected {
            println!("{}", p.display());
        }
        println!(
            "Would remove {} of {} entries from {}",
            report.selected.len(),
            report.listed,
            dir.display()
        );
        return Ok(());
    }

    println!(
        "Removed {} of {} entries from {}",
        report.removed.len(),
        report.listed,
        dir.display()
    );
    if !report.is_clean() {
        for (p, e) in &report.failed {
            eprintln!("failed to remove {}: {}", p.display(), e);
        }
        bail!("{} entries could not be removed", report.failed.len());
    }
    Ok(())
}
