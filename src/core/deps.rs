use crate::core::runner::CommandRunner;
use crate::error::Result;
use crate::utils::prompt::Prompter;
use colored::Colorize;

/// Install attempts allowed per dependency before the flow gives up, so a
/// user repeatedly answering "try again" cannot loop forever.
pub const MAX_INSTALL_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepOutcome {
    /// Executable was already on PATH.
    Present,
    /// Executable appeared after a successful install.
    Installed,
    /// User declined the install; later steps may fail.
    Skipped,
    /// Install failed and the user asked to try again; the caller restarts
    /// the whole flow from dependency checking.
    RetryRequested,
    /// Install failed and the user gave up, or the attempt bound ran out.
    Unavailable,
}

/// One external executable and the shell command that installs it.
#[derive(Debug)]
pub struct Dependency {
    pub name: &'static str,
    pub install_cmd: &'static str,
    attempts: u32,
}

impl Dependency {
    pub fn new(name: &'static str, install_cmd: &'static str) -> Self {
        Dependency {
            name,
            install_cmd,
            attempts: 0,
        }
    }

    fn is_installed(&self) -> bool {
        which::which(self.name).is_ok()
    }
}

/// Detect one dependency and walk the user through installing it if absent.
/// Attempt counting lives on the `Dependency` itself, so it survives the
/// full-flow restarts triggered by `RetryRequested`.
pub fn ensure(
    dep: &mut Dependency,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
) -> Result<DepOutcome> {
    if dep.is_installed() {
        return Ok(DepOutcome::Present);
    }

    let question = format!(
        "You need to install {}. Do you want to install it?",
        dep.name
    );
    if !prompter.confirm(&question)? {
        return Ok(DepOutcome::Skipped);
    }

    dep.attempts += 1;
    runner.run_streaming(dep.install_cmd)?;

    if dep.is_installed() {
        println!(
            "{}",
            format!("{} successfully installed", dep.name).bright_green()
        );
        return Ok(DepOutcome::Installed);
    }

    println!(
        "{}",
        format!("{} failed to install", dep.name).bright_red()
    );

    if dep.attempts >= MAX_INSTALL_ATTEMPTS {
        return Ok(DepOutcome::Unavailable);
    }

    if prompter.confirm("Do you want to try again?")? {
        Ok(DepOutcome::RetryRequested)
    } else {
        Ok(DepOutcome::Unavailable)
    }
}
