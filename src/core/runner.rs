use crate::error::{Result, TubegrabError};
use std::process::{Command, Stdio};

/// Exit status of a finished shell command. `status` is `None` when the
/// child was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub status: Option<i32>,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Seam for everything that shells out: package-manager installs and the
/// downloader invocation both go through here.
pub trait CommandRunner {
    /// Run a shell command line, streaming its output to the console as it
    /// arrives, and report the child's exit status once it finishes.
    fn run_streaming(&self, line: &str) -> Result<RunOutcome>;
}

pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run_streaming(&self, line: &str) -> Result<RunOutcome> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(line)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| TubegrabError::Spawn {
                command: line.to_string(),
                source: e,
            })?;

        let status = child.wait()?;

        Ok(RunOutcome {
            status: status.code(),
        })
    }
}
