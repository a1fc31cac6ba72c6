use crate::core::command::build_download_command;
use crate::core::config::Config;
use crate::core::deps::{self, DepOutcome, Dependency};
use crate::core::runner::CommandRunner;
use crate::error::{Result, TubegrabError};
use crate::utils::prompt::Prompter;
use colored::Colorize;
use std::path::Path;

/// Where the flow currently is. A failed install retry re-enters
/// `CheckingDeps`, which restarts the run from the very beginning.
enum State {
    CheckingDeps,
    ReadingUrl,
    ResolvingConfig { url: String },
    Running { url: String, config: Config },
    Failed(TubegrabError),
    Done,
}

enum DepsStep {
    Ready,
    Restart,
    Unavailable(&'static str),
}

/// The whole run: dependency checks, URL intake, config resolution and the
/// downloader invocation, with every collaborator passed in explicitly.
pub struct DownloadFlow<'a> {
    config_path: &'a Path,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    dependencies: Vec<Dependency>,
}

impl<'a> DownloadFlow<'a> {
    pub fn new(
        config_path: &'a Path,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
    ) -> Self {
        DownloadFlow {
            config_path,
            runner,
            prompter,
            dependencies: vec![
                Dependency::new("python", "pkg install python"),
                Dependency::new("yt-dlp", "pip install yt-dlp"),
            ],
        }
    }

    pub fn run(mut self, url: Option<&str>) -> Result<()> {
        let mut state = State::CheckingDeps;

        loop {
            state = match state {
                State::CheckingDeps => match self.check_dependencies()? {
                    DepsStep::Restart => State::CheckingDeps,
                    DepsStep::Unavailable(name) => {
                        State::Failed(TubegrabError::DependencyUnavailable {
                            name: name.to_string(),
                        })
                    }
                    DepsStep::Ready => {
                        println!("{}", "All dependencies installed".bright_green());
                        State::ReadingUrl
                    }
                },
                State::ReadingUrl => match url {
                    Some(url) => {
                        println!("{}", format!("URL: {url}").bright_blue());
                        State::ResolvingConfig {
                            url: url.to_string(),
                        }
                    }
                    None => State::Failed(TubegrabError::MissingUrl),
                },
                State::ResolvingConfig { url } => {
                    let config = Config::resolve(self.config_path, self.prompter)?;
                    State::Running { url, config }
                }
                State::Running { url, config } => {
                    let line = build_download_command(&url, &config);
                    let outcome = self.runner.run_streaming(&line)?;

                    if !outcome.success() {
                        let status = outcome
                            .status
                            .map_or_else(|| "signal".to_string(), |code| code.to_string());
                        println!(
                            "{}",
                            format!("yt-dlp exited with status {status}").bright_red()
                        );
                    }

                    State::Done
                }
                State::Failed(err) => return Err(err),
                State::Done => return Ok(()),
            };
        }
    }

    /// Walks both dependencies in order. Attempt counters live on the
    /// dependencies themselves, so restarts cannot retry forever.
    fn check_dependencies(&mut self) -> Result<DepsStep> {
        for dep in &mut self.dependencies {
            match deps::ensure(dep, self.runner, self.prompter)? {
                DepOutcome::RetryRequested => return Ok(DepsStep::Restart),
                DepOutcome::Unavailable => return Ok(DepsStep::Unavailable(dep.name)),
                DepOutcome::Present | DepOutcome::Installed | DepOutcome::Skipped => {}
            }
        }

        Ok(DepsStep::Ready)
    }
}
