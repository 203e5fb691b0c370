//! Counts existing cluster resources so the sequencer can decide apply vs
//! skip.
//!
//! Any failed query coerces to a zero count. On a fresh cluster the kinds
//! being counted may not exist at all, and that absence must read as "needs
//! provisioning", never as a fatal error.

use crate::kubectl::{CliCapture, ClusterCli};

/// Number of resources of `kind` in `namespace`.
pub fn count_namespaced(cli: &dyn ClusterCli, kind: &str, namespace: &str) -> usize {
    counted(cli.capture(&["get", kind, "-n", namespace, "--no-headers"]))
}

/// Number of resources of `kind` across all namespaces, for kinds that are
/// not scoped to one.
pub fn count_cluster_scoped(cli: &dyn ClusterCli, kind: &str) -> usize {
    counted(cli.capture(&["get", kind, "-A", "--no-headers"]))
}

fn counted(capture: CliCapture) -> usize {
    if !capture.success {
        return 0;
    }
    count_lines(&capture.stdout)
}

/// One resource per non-blank line; the query already suppresses headers.
fn count_lines(stdout: &str) -> usize {
    stdout.lines().filter(|line| !line.trim().is_empty()).count()
}
