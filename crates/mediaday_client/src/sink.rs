use std::path::PathBuf;

use mediaday_logging::mediaday_info;

use crate::{AtomicFileWriter, PersistError};

pub const ARTIFACT_FILE_NAME: &str = "cbtc-media-day-2025.zip";
pub const ARTIFACT_MIME_TYPE: &str = "application/zip";

/// A decoded archive ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn zip(bytes: Vec<u8>) -> Self {
        Self {
            file_name: ARTIFACT_FILE_NAME.to_string(),
            mime_type: ARTIFACT_MIME_TYPE.to_string(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub file_name: String,
    pub location: Option<PathBuf>,
    pub byte_len: u64,
}

/// Capability to save bytes as a named file on the user's side.
pub trait ArtifactSink: Send + Sync {
    fn save(&self, artifact: &Artifact) -> Result<SavedArtifact, PersistError>;
}

/// Saves artifacts into a download directory, replacing same-named files.
#[derive(Debug, Clone)]
pub struct DownloadDirSink {
    writer: AtomicFileWriter,
}

impl DownloadDirSink {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }
}

impl ArtifactSink for DownloadDirSink {
    fn save(&self, artifact: &Artifact) -> Result<SavedArtifact, PersistError> {
        let path = self.writer.write(&artifact.file_name, &artifact.bytes)?;
        mediaday_info!(
            "Saved {} ({}, {} bytes) to {:?}",
            artifact.file_name,
            artifact.mime_type,
            artifact.bytes.len(),
            path
        );
        Ok(SavedArtifact {
            file_name: artifact.file_name.clone(),
            location: Some(path),
            byte_len: artifact.bytes.len() as u64,
        })
    }
}
