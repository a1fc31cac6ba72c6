use thiserror::Error;

pub type Result<T> = std::result::Result<T, TubegrabError>;

#[derive(Error, Debug)]
pub enum TubegrabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No arguments provided")]
    MissingUrl,

    #[error("'{name}' could not be installed")]
    DependencyUnavailable { name: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

impl From<dialoguer::Error> for TubegrabError {
    fn from(error: dialoguer::Error) -> Self {
        TubegrabError::Prompt {
            message: error.to_string(),
        }
    }
}

impl TubegrabError {
    /// Process exit code for this error when it reaches the binary boundary.
    pub fn exit_code(&self) -> i32 {
        match self {
            TubegrabError::MissingUrl => 1,
            TubegrabError::DependencyUnavailable { .. } => 2,
            _ => 1,
        }
    }

    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        TubegrabError::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TubegrabError::MissingUrl.exit_code(), 1);
        assert_eq!(
            TubegrabError::DependencyUnavailable {
                name: "yt-dlp".to_string()
            }
            .exit_code(),
            2
        );
        assert_eq!(
            TubegrabError::invalid_config("format is empty").exit_code(),
            1
        );
    }
}
