//! CLI argument parsing for the provisioning run.
//!
//! The CLI is intentionally thin: it collects the run configuration once at
//! startup so the sequencer stays pure and testable with injected inputs.
use clap::Parser;

/// Root CLI entrypoint.
///
/// Defaults may come from the environment so CI jobs and demo scripts can
/// configure a run without flags.
#[derive(Parser, Debug)]
#[command(
    name = "kseed",
    version,
    about = "Idempotently provision demo resources in a Kubernetes cluster",
    after_help = "Environment:\n  KSEED_NAMESPACE      Default for --namespace\n  KSEED_MIN_COUNT      Default for --min-count\n  KSEED_KUBECTL_PATH   Cluster CLI binary (default: kubectl)\n  KSEED_MANIFEST_DIR   Manifest directory override\n\nExamples:\n  kseed\n  kseed --namespace demo --min-count 3\n  kseed --dry-run"
)]
pub struct Cli {
    /// Namespace the demo workloads live in
    #[arg(long, value_name = "NS", env = "KSEED_NAMESPACE", default_value = "kseed-demo")]
    pub namespace: String,

    /// Minimum per-kind resource count before a step is skipped
    #[arg(long, value_name = "N", env = "KSEED_MIN_COUNT", default_value_t = 2)]
    pub min_count: usize,

    /// Report what would be applied without touching the cluster
    #[arg(long)]
    pub dry_run: bool,

    /// Emit debug-level diagnostics
    #[arg(long)]
    pub verbose: bool,
}
