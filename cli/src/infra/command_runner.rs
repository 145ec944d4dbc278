//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution. By default an invocation blocks until the
//! child exits; an optional timeout kills overrunning children.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`: spawns the program with piped stdout/stderr
/// and a closed stdin.
///
/// When a timeout is configured and fires, the pending wait is dropped and
/// the child is killed through `kill_on_drop` as it goes out of scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let collect = collect_output(&mut child, stdout, stderr, program);

        match self.timeout {
            None => collect.await,
            Some(limit) => tokio::time::timeout(limit, collect)
                .await
                .map_err(|_| anyhow::anyhow!("{program} timed out after {}s", limit.as_secs()))?,
        }
    }
}

async fn collect_output(
    child: &mut Child,
    stdout: Option<impl AsyncRead + Unpin>,
    stderr: Option<impl AsyncRead + Unpin>,
    program: &str,
) -> Result<Output> {
    let (status, stdout, stderr) = tokio::join!(child.wait(), read_all(stdout), read_all(stderr));
    Ok(Output {
        status: status.with_context(|| format!("waiting for {program}"))?,
        stdout,
        stderr,
    })
}

async fn read_all(handle: Option<impl AsyncRead + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = h.read_to_end(&mut buf).await;
    }
    buf
}
