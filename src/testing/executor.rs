//! Subprocess execution
//!
//! Runs the executable under test against one input file and captures its
//! stdout as lines. Stderr passes through to the console; the exit status is
//! only logged.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

use crate::common::{Error, Result};

/// Trait for anything that can produce captured output for a test input
#[async_trait]
pub trait Executor: Send {
    /// Run against `input` and return every stdout line, terminators removed
    async fn capture(&mut self, input: &Path) -> Result<Vec<String>>;
}

/// Executes a real program, optionally through a launcher such as `mono`
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: PathBuf,
    launcher: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            launcher: None,
        }
    }

    /// Run the program through `launcher`, resolved on PATH
    pub fn with_launcher(mut self, launcher: &str) -> Result<Self> {
        let resolved =
            which::which(launcher).map_err(|_| Error::LauncherNotFound(launcher.to_string()))?;
        self.launcher = Some(resolved);
        Ok(self)
    }

    fn command(&self, input: &Path) -> TokioCommand {
        let mut cmd = match &self.launcher {
            Some(launcher) => {
                let mut cmd = TokioCommand::new(launcher);
                cmd.arg(&self.program);
                cmd
            }
            None => TokioCommand::new(&self.program),
        };
        cmd.arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn capture(&mut self, input: &Path) -> Result<Vec<String>> {
        tracing::debug!(
            program = %self.program.display(),
            input = %input.display(),
            "Spawning test subprocess"
        );

        let mut child = self
            .command(input)
            .spawn()
            .map_err(|e| Error::spawn_failed(&self.program.display().to_string(), &e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Internal("child stdout was not piped".to_string()))?;

        // Read raw bytes so a stray non-UTF-8 byte can't abort the run
        let mut reader = BufReader::new(stdout);
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }

        let status = child.wait().await?;
        tracing::debug!(?status, lines = lines.len(), "Test subprocess finished");

        Ok(lines)
    }
}
