// create_files.rs: fill the target directory with randomly named fixture files.
// Usage: cargo run --bin create_files -- <COUNT> [--dir mount] [--seed N]

use anyhow::Context;
use clap::Parser;

use mount_fixtures::cli::{make_rng, CommonArgs};
use mount_fixtures::fs_op::sync::FlushMode;
use mount_fixtures::generator::{generate, GenerateOptions};

#[derive(Debug, Parser)]
#[command(version, about = "Create COUNT fixture files in the target directory")]
struct Cli {
    /// Number of files to create
    count: usize,

    /// How to flush written files to disk
    #[arg(long, value_enum)]
    flush: Option<FlushMode>,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.common.settings()?;
    let _guard = cli.common.init_logging(&settings, "create_files")?;

    let opts = GenerateOptions {
        flush: cli.flush.unwrap_or(settings.flush),
        progress: cli.progress || settings.progress,
    };
    let mut rng = make_rng(settings.seed);
    let dir = &settings.target_dir;

    let report = generate(dir, cli.count, &mut rng, &opts)
        .with_context(|| format!("creating fixtures in {}", dir.display()))?;

    println!(
        "Wrote {} fixtures ({} bytes) to {}",
        report.created.len(),
        report.bytes_written,
        dir.display()
    );
    Ok(())
}
