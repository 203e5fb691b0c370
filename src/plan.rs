//! The fixed, ordered provisioning plan and manifest resolution.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// One provisioning step.
///
/// A closed set of variants keeps count-gating a pure enum-to-behavior
/// mapping instead of per-step callables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Applied on every run; used for the namespace the rest depend on.
    Unconditional {
        kind: &'static str,
        manifest: &'static str,
    },
    /// Applied only when the namespaced count falls below the threshold.
    Namespaced {
        kind: &'static str,
        manifest: &'static str,
    },
    /// Applied only when the cluster-wide count falls below the threshold.
    ClusterScoped {
        kind: &'static str,
        manifest: &'static str,
    },
}

impl Step {
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Unconditional { kind, .. }
            | Step::Namespaced { kind, .. }
            | Step::ClusterScoped { kind, .. } => kind,
        }
    }

    pub fn manifest(&self) -> &'static str {
        match self {
            Step::Unconditional { manifest, .. }
            | Step::Namespaced { manifest, .. }
            | Step::ClusterScoped { manifest, .. } => manifest,
        }
    }
}

/// The demo resource plan.
///
/// Order is load-bearing: the namespace must exist before any namespaced
/// manifest is applied.
pub fn demo_steps() -> Vec<Step> {
    vec![
        Step::Unconditional {
            kind: "namespaces",
            manifest: "namespace.yaml",
        },
        Step::Namespaced {
            kind: "deployments",
            manifest: "deployments.yaml",
        },
        Step::Namespaced {
            kind: "statefulsets",
            manifest: "statefulsets.yaml",
        },
        Step::Namespaced {
            kind: "services",
            manifest: "services.yaml",
        },
        Step::Namespaced {
            kind: "ingresses",
            manifest: "ingresses.yaml",
        },
        Step::ClusterScoped {
            kind: "ingressclasses",
            manifest: "ingressclasses.yaml",
        },
    ]
}

/// Directory holding the step manifests, resolved relative to the installed
/// binary rather than the caller's working directory so kseed can run from
/// anywhere. `KSEED_MANIFEST_DIR` overrides; a source checkout falls back to
/// the crate's own `manifests/`.
pub fn manifest_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("KSEED_MANIFEST_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().context("locate kseed binary")?;
    if let Some(candidate) = exe.parent().map(|dir| dir.join("manifests")) {
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }
    Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("manifests"))
}
