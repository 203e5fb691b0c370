//! Apply-or-skip sequencing over the provisioning plan.

use anyhow::Result;
use std::path::Path;
use thiserror::Error;

use crate::inspector;
use crate::kubectl::ClusterCli;
use crate::plan::Step;

/// Immutable run inputs, collected once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub namespace: String,
    pub min_count: usize,
    pub dry_run: bool,
}

/// A failed `apply` invocation. Aborts the run; the code becomes the process
/// exit status.
#[derive(Debug, Error)]
#[error("apply failed for {kind} ({manifest}): exit status {code}")]
pub struct ApplyError {
    pub kind: String,
    pub manifest: String,
    pub code: i32,
}

/// Walk the plan in order, applying each step whose observed count falls
/// below the threshold.
///
/// Each step's decision depends only on its own count; the only coupling
/// between steps is their fixed order, which encodes resource dependency
/// (namespace first). The apply itself is a declarative upsert delegated to
/// the cluster CLI, so re-running against a satisfied cluster is a pure
/// skip.
pub fn run(
    cli: &dyn ClusterCli,
    config: &RunConfig,
    manifest_dir: &Path,
    steps: &[Step],
) -> Result<()> {
    if config.dry_run {
        for step in steps {
            println!(
                "dry-run: would apply {}",
                manifest_dir.join(step.manifest()).display()
            );
        }
        return Ok(());
    }

    for step in steps {
        let current = match step {
            Step::Unconditional { .. } => None,
            Step::Namespaced { kind, .. } => {
                Some(inspector::count_namespaced(cli, kind, &config.namespace))
            }
            Step::ClusterScoped { kind, .. } => Some(inspector::count_cluster_scoped(cli, kind)),
        };
        match current {
            None => {
                println!("{}: applying {} (unconditional)", step.kind(), step.manifest());
                apply(cli, manifest_dir, step.kind(), step.manifest())?;
            }
            Some(current) => gate(cli, config, manifest_dir, step, current)?,
        }
    }
    Ok(())
}

fn gate(
    cli: &dyn ClusterCli,
    config: &RunConfig,
    manifest_dir: &Path,
    step: &Step,
    current: usize,
) -> Result<()> {
    println!(
        "{}",
        decision_line(step.kind(), step.manifest(), current, config.min_count)
    );
    if current < config.min_count {
        apply(cli, manifest_dir, step.kind(), step.manifest())?;
    }
    Ok(())
}

/// Human-readable decision line stating kind, observed count, and threshold.
fn decision_line(kind: &str, manifest: &str, current: usize, min_count: usize) -> String {
    if current < min_count {
        format!("{kind}: found {current} < {min_count}, applying {manifest}")
    } else {
        format!("{kind}: found {current} >= {min_count}, skipping")
    }
}

fn apply(cli: &dyn ClusterCli, manifest_dir: &Path, kind: &str, manifest: &str) -> Result<()> {
    let path = manifest_dir.join(manifest);
    let path = path.to_string_lossy();
    let code = cli.invoke(&["apply", "-f", path.as_ref()])?;
    if code != 0 {
        return Err(ApplyError {
            kind: kind.to_string(),
            manifest: manifest.to_string(),
            code,
        }
        .into());
    }
    Ok(())
}
