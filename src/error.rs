use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FileQueryError {
    #[error("No such file or directory: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("There is no (regular) file at {}", .0.display())]
    NotAFile(PathBuf),
    #[error("There is no directory at {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("Sequence is empty")]
    EmptySequence,
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Invalid file size unit: {0}")]
    InvalidUnit(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl FileQueryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileQueryError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        FileQueryError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}
pub type Result<T> = std::result::Result<T, FileQueryError>;
