use crate::error::{Result, TubegrabError};
use crate::utils::prompt::Prompter;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Destination alias for downloaded files. Serialized as the literal path
/// string so the on-disk JSON stays compatible with configs written by
/// earlier versions of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFolder {
    #[serde(rename = "~/storage/shared/Music")]
    Music,
    #[serde(rename = "~/storage/shared/Videos")]
    Videos,
    #[serde(rename = ".")]
    CurrentDir,
}

impl OutputFolder {
    /// Literal path handed to the shell; `~` is left for the shell to expand.
    pub fn path(&self) -> &'static str {
        match self {
            OutputFolder::Music => "~/storage/shared/Music",
            OutputFolder::Videos => "~/storage/shared/Videos",
            OutputFolder::CurrentDir => ".",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub format: String,
    pub output_folder: OutputFolder,
    pub sponsorblock_enabled: bool,
    pub move_files: bool,
    pub enable_playlists: bool,
}

impl Config {
    /// Where the config lives for a normal run. Tests inject their own path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("config.json")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        if config.format.is_empty() {
            return Err(TubegrabError::invalid_config("format must not be empty"));
        }

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Asks every preference question in a fixed order and assembles a fresh
    /// config. The first answer (whether to persist the config) is returned
    /// alongside so the caller can apply it after assembly.
    pub fn create_interactive(prompter: &dyn Prompter) -> Result<(Self, bool)> {
        let save = prompter
            .confirm("Do you want to create a new config file? (answering no will not save it)")?;

        let formats = ["Audio+Video", "Video only", "Audio only", "Other"];
        let format = match prompter.select("What format do you want to download?", &formats)? {
            0 => "bestvideo+bestaudio".to_string(),
            1 => "bestvideo".to_string(),
            2 => "bestaudio".to_string(),
            _ => prompter.input("What format do you want to download?")?,
        };

        let folders = ["Music", "Videos", "Current directory"];
        let output_folder = match prompter.select("Where do you want to save the files?", &folders)?
        {
            0 => OutputFolder::Music,
            1 => OutputFolder::Videos,
            _ => OutputFolder::CurrentDir,
        };

        let sponsorblock_enabled = prompter.confirm("Do you want to enable sponsorblock-API ?")?;
        let move_files = prompter.confirm("Do you want to move the files to the output folder?")?;
        let enable_playlists = prompter.confirm("Do you want to enable downloading playlists?")?;

        let config = Config {
            format,
            output_folder,
            sponsorblock_enabled,
            move_files,
            enable_playlists,
        };

        Ok((config, save))
    }

    /// Load-or-create: an existing file is offered for reuse; declining it,
    /// or any read/parse failure, falls through to interactive creation.
    /// Creation persists the result only when the user opted in.
    pub fn resolve(path: &Path, prompter: &dyn Prompter) -> Result<Self> {
        if path.exists() {
            if prompter.confirm("Do you want to use the config file?")? {
                match Config::load_from(path) {
                    Ok(config) => return Ok(config),
                    Err(_) => println!("{}", "Failed to read config file".bright_red()),
                }
            }
        }

        let (config, save) = Config::create_interactive(prompter)?;

        if save {
            config.save_to(path)?;
        }

        Ok(config)
    }
}
