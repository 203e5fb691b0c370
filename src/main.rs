use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod inspector;
mod kubectl;
mod plan;
mod sequencer;

use cli::Cli;
use kubectl::Kubectl;
use sequencer::{ApplyError, RunConfig};

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kseed: error: {err:#}");
            exit_code_for(&err)
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let config = RunConfig {
        namespace: args.namespace.clone(),
        min_count: args.min_count,
        dry_run: args.dry_run,
    };
    let manifest_dir = plan::manifest_dir()?;
    let steps = plan::demo_steps();
    let kubectl = Kubectl::locate()?;
    sequencer::run(&kubectl, &config, &manifest_dir, &steps)
}

/// Apply failures carry the external tool's exit status through to the
/// process exit; everything else is a generic failure.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ApplyError>() {
        Some(apply) => ExitCode::from(u8::try_from(apply.code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "kseed=debug" } else { "kseed=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
