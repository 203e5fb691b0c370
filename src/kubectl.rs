//! Thin runner around the external cluster CLI.
//!
//! Everything the tool learns about the cluster arrives through the
//! `ClusterCli` seam, so tests can substitute a scripted implementation.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Captured result of a read-only CLI query.
#[derive(Debug, Clone)]
pub struct CliCapture {
    pub stdout: String,
    pub success: bool,
}

impl CliCapture {
    pub fn failed() -> Self {
        Self {
            stdout: String::new(),
            success: false,
        }
    }
}

/// Seam between the provisioning logic and the external cluster CLI.
pub trait ClusterCli {
    /// Run the CLI and capture stdout. Spawn failures and non-zero exits
    /// surface as `success = false`, never as an error: a query that cannot
    /// be answered is equivalent to an empty answer.
    fn capture(&self, args: &[&str]) -> CliCapture;

    /// Run the CLI with stdout/stderr inherited so its diagnostics reach the
    /// console, and return the exit code. Only spawn errors are `Err`.
    fn invoke(&self, args: &[&str]) -> Result<i32>;
}

/// Production implementation shelling out to `kubectl` (or an override).
pub struct Kubectl {
    binary: OsString,
}

impl Kubectl {
    /// Locate the cluster CLI binary, honoring the `KSEED_KUBECTL_PATH`
    /// override. Resolving up front means a broken environment is reported
    /// before any step runs.
    pub fn locate() -> Result<Self> {
        let name =
            std::env::var_os("KSEED_KUBECTL_PATH").unwrap_or_else(|| OsString::from("kubectl"));
        let binary = which::which(&name)
            .with_context(|| format!("cluster CLI {} not found on PATH", name.to_string_lossy()))?;
        Ok(Self {
            binary: binary.into_os_string(),
        })
    }
}

impl ClusterCli for Kubectl {
    fn capture(&self, args: &[&str]) -> CliCapture {
        tracing::debug!(?args, "query");
        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output();
        match output {
            Ok(output) => CliCapture {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                success: output.status.success(),
            },
            Err(err) => {
                tracing::debug!(%err, "query spawn failed");
                CliCapture::failed()
            }
        }
    }

    fn invoke(&self, args: &[&str]) -> Result<i32> {
        tracing::debug!(?args, "invoke");
        let status = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .with_context(|| format!("spawn {}", self.binary.to_string_lossy()))?;
        Ok(status.code().unwrap_or(1))
    }
}
