//! Writing a person's record description to a file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::person::{Person, PersonRecord, Student};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn write_description(path: &Path, description: String) -> Result<(), ExportError> {
    tracing::debug!(path = %path.display(), "writing person record");
    std::fs::write(path, description).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Person {
    /// Write [`Person::describe`] to `path`, replacing any existing content.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        write_description(path.as_ref(), self.describe())
    }
}

impl Student {
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        write_description(path.as_ref(), self.describe())
    }
}

impl PersonRecord {
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        write_description(path.as_ref(), self.describe())
    }
}
