//! Shared test infrastructure: stages a scripted fake kubectl and runs the
//! compiled kseed binary against it.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct FakeCluster {
    dir: TempDir,
}

impl FakeCluster {
    /// Stage a fake kubectl whose behavior is the given shell script body.
    ///
    /// The body sees the kubectl argv in `"$@"`; every invocation is
    /// appended to a call log before the body runs.
    pub fn with_script(body: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("kubectl");
        let script = format!("#!/bin/sh\nprintf '%s\\n' \"$*\" >> \"$KSEED_TEST_LOG\"\n{body}\n");
        fs::write(&path, script).expect("write fake kubectl");
        let mut perms = fs::metadata(&path)
            .expect("stat fake kubectl")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod fake kubectl");
        Self { dir }
    }

    fn kubectl_path(&self) -> PathBuf {
        self.dir.path().join("kubectl")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Run kseed with the fake kubectl wired in.
    pub fn run_kseed(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_kseed"))
            .args(args)
            .env("KSEED_KUBECTL_PATH", self.kubectl_path())
            .env("KSEED_TEST_LOG", self.log_path())
            .env_remove("KSEED_NAMESPACE")
            .env_remove("KSEED_MIN_COUNT")
            .env_remove("KSEED_MANIFEST_DIR")
            .output()
            .expect("run kseed")
    }

    /// Create the marker file scripts can probe to change behavior between
    /// runs (e.g. "the cluster is provisioned now").
    pub fn mark_provisioned(&self) {
        fs::write(self.dir.path().join("provisioned"), b"").expect("write marker");
    }

    /// kubectl invocations recorded by the fake, one argv per line.
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(self.log_path()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
