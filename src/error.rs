//! Error types for dirtree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong outside of directory listing.
///
/// Listing failures are not represented here: an unreadable directory
/// renders as an empty one.
#[derive(Debug, Error)]
pub enum DirtreeError {
    #[error("The specified path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("The specified path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error writing to file: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to file: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file task stopped abnormally before producing a result.
    #[error("File task was interrupted: {0}")]
    TaskInterrupted(String),

    #[error("error writing output: {0}")]
    Console(#[source] io::Error),
}

impl DirtreeError {
    /// Path of the output file involved, if any.
    pub fn output_path(&self) -> Option<&PathBuf> {
        match self {
            DirtreeError::CreateOutput { path, .. } | DirtreeError::WriteOutput { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let missing = DirtreeError::PathNotFound(PathBuf::from("/no/such/place"));
        assert_eq!(
            missing.to_string(),
            "The specified path does not exist: /no/such/place"
        );

        let file = DirtreeError::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(
            file.to_string(),
            "The specified path is not a directory: notes.txt"
        );
    }

    #[test]
    fn test_file_error_message_carries_cause() {
        let err = DirtreeError::CreateOutput {
            path: PathBuf::from("out_tree.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert_eq!(err.to_string(), "Error writing to file: access denied");
        assert_eq!(err.output_path(), Some(&PathBuf::from("out_tree.txt")));
    }

    #[test]
    fn test_interrupted_message() {
        let err = DirtreeError::TaskInterrupted("boom".to_string());
        assert_eq!(err.to_string(), "File task was interrupted: boom");
        assert!(err.output_path().is_none());
    }
}
