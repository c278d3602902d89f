use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Player file problems
    #[error("Invalid input format in {path}: {message}")]
    InputFormat { path: String, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(
        "Naming conflict: letters for '{first}' and '{second}' would both be written to {file_name}"
    )]
    NamingConflict {
        file_name: String,
        first: String,
        second: String,
    },

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an input format error for the given file
    pub fn input_format(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error together with the path that caused it
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a naming conflict error for two players sharing a letter file
    pub fn naming_conflict(
        file_name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::NamingConflict {
            file_name: file_name.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Path associated with the error, if there is one
    pub fn path(&self) -> Option<&str> {
        match self {
            AppError::InputFormat { path, .. } | AppError::Io { path, .. } => Some(path),
            AppError::NamingConflict { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}
