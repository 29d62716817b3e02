//! CLI entrypoint for `sobject-typings`.

use std::io::Write;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use sobject_typings::cli::Args;
use sobject_typings::typing::GenerationSummary;
use sobject_typings::{TypingGenerator, config, refresh};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);
    run(&args).await
}

async fn run(args: &Args) -> color_eyre::Result<()> {
    let config = config::load_config(args.config_path.as_deref(), &args.overrides())?;
    let output = refresh::load_refresh_output(&config.project_root, &config.describe_dir())?;
    let generator = TypingGenerator::new().with_max_concurrency(config.max_concurrency()?);

    let summary = match &config.out_dir {
        Some(out_dir) => generator.generate_types(output.all(), out_dir).await?,
        None => generator.generate(&output).await?,
    };

    report(&summary).wrap_err("failed to report generated files")
}

fn report(summary: &GenerationSummary) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for path in summary.files() {
        writeln!(stdout, "{path}")?;
    }
    stdout.flush()
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _unused = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
