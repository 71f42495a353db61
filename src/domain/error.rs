use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input error: cannot read `{}`: {message}", .path.display())]
    InputError { path: PathBuf, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Output error: cannot write `{}`: {message}", .path.display())]
    OutputError { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    SerializeError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn input(path: &Path, err: impl std::fmt::Display) -> Self {
        AppError::InputError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn output(path: &Path, err: impl std::fmt::Display) -> Self {
        AppError::OutputError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Prefix a parse error with the file it came from.
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            AppError::ParseError(msg) => {
                AppError::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializeError(err.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
