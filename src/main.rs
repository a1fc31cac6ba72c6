use anyhow::Result;
use clap::Parser;
use colored::Colorize;

// Use the library modules
use tubegrab::commands::download::DownloadFlow;
use tubegrab::core::config::Config;
use tubegrab::core::runner::ShellRunner;
use tubegrab::utils::prompt::ConsolePrompter;

#[derive(Parser)]
#[clap(name = "tubegrab")]
#[clap(about = "Interactive yt-dlp front-end for Termux")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// URL to download
    url: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = Config::default_path();
    let flow = DownloadFlow::new(&config_path, &ShellRunner, &ConsolePrompter);

    if let Err(e) = flow.run(cli.url.as_deref()) {
        eprintln!("{}", e.to_string().bright_red());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
