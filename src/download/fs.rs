//! Filesystem download host
//!
//! The native counterpart of a browser download: activating a link saves
//! the blob into a downloads directory under the link's file name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use super::{Blob, DownloadHost, DownloadLink, ObjectUrl};
use crate::error::{ExportError, ExportResult};
use crate::file_io::write_bytes_atomic;

/// Saves downloads into a directory
#[derive(Debug)]
pub struct FileSystemHost {
    download_dir: PathBuf,
    blobs: HashMap<String, Blob>,
    saved: Vec<PathBuf>,
}

impl FileSystemHost {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            blobs: HashMap::new(),
            saved: Vec::new(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Files written so far, in order
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Number of URLs created but not yet revoked
    pub fn live_urls(&self) -> usize {
        self.blobs.len()
    }
}

/// Reject names that would escape the download directory
fn validate_file_name(file_name: &str) -> ExportResult<()> {
    let invalid = file_name.trim().is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}

impl DownloadHost for FileSystemHost {
    fn supports_download(&self) -> bool {
        true
    }

    fn create_object_url(&mut self, blob: Blob) -> ExportResult<ObjectUrl> {
        let url = format!("blob:{}", Uuid::new_v4());
        debug!(url = %url, bytes = blob.len(), "created object URL");
        self.blobs.insert(url.clone(), blob);
        Ok(ObjectUrl::new(url))
    }

    fn activate_link(&mut self, link: &DownloadLink<'_>) -> ExportResult<()> {
        validate_file_name(link.file_name)?;

        let blob = self
            .blobs
            .get(link.href)
            .ok_or_else(|| ExportError::Download(format!("Unknown object URL: {}", link.href)))?;

        let path = self.download_dir.join(link.file_name);
        write_bytes_atomic(&path, blob.bytes()).map_err(|e| {
            ExportError::Download(format!("Failed to save {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "saved download");
        self.saved.push(path);
        Ok(())
    }

    fn revoke_object_url(&mut self, url: ObjectUrl) {
        if self.blobs.remove(url.as_str()).is_some() {
            debug!(url = url.as_str(), "revoked object URL");
        }
    }
}
