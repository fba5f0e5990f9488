//! In-memory download host
//!
//! Records every offered file and every revoked URL instead of touching the
//! filesystem. Useful in tests and for dry runs.

use std::collections::HashMap;

use super::{Blob, DownloadHost, DownloadLink, ObjectUrl};
use crate::error::{ExportError, ExportResult};

/// A file the host was asked to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferedFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
    pub hidden: bool,
}

/// Download host that keeps everything in memory
#[derive(Debug)]
pub struct MemoryHost {
    supported: bool,
    fail_activation: bool,
    created: usize,
    blobs: HashMap<String, Blob>,
    downloads: Vec<OfferedFile>,
    revoked: Vec<String>,
}

impl MemoryHost {
    /// Host that supports downloads
    pub fn new() -> Self {
        Self {
            supported: true,
            fail_activation: false,
            created: 0,
            blobs: HashMap::new(),
            downloads: Vec::new(),
            revoked: Vec::new(),
        }
    }

    /// Host without download support
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    /// Host whose link activation always fails
    pub fn failing() -> Self {
        Self {
            fail_activation: true,
            ..Self::new()
        }
    }

    pub fn downloads(&self) -> &[OfferedFile] {
        &self.downloads
    }

    /// URLs released so far, in order
    pub fn revoked(&self) -> &[String] {
        &self.revoked
    }

    /// Number of URLs ever created
    pub fn created_urls(&self) -> usize {
        self.created
    }

    /// Number of URLs created but not yet revoked
    pub fn live_urls(&self) -> usize {
        self.blobs.len()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadHost for MemoryHost {
    fn supports_download(&self) -> bool {
        self.supported
    }

    fn create_object_url(&mut self, blob: Blob) -> ExportResult<ObjectUrl> {
        self.created += 1;
        let url = format!("blob:memory/{}", self.created);
        self.blobs.insert(url.clone(), blob);
        Ok(ObjectUrl::new(url))
    }

    fn activate_link(&mut self, link: &DownloadLink<'_>) -> ExportResult<()> {
        if self.fail_activation {
            return Err(ExportError::Download("link activation failed".into()));
        }

        let blob = self
            .blobs
            .get(link.href)
            .ok_or_else(|| ExportError::Download(format!("Unknown object URL: {}", link.href)))?;

        self.downloads.push(OfferedFile {
            file_name: link.file_name.to_string(),
            mime_type: blob.mime_type().to_string(),
            content: blob.bytes().to_vec(),
            hidden: link.hidden,
        });
        Ok(())
    }

    fn revoke_object_url(&mut self, url: ObjectUrl) {
        self.blobs.remove(url.as_str());
        self.revoked.push(url.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_url_rejected() {
        let mut host = MemoryHost::new();
        let link = DownloadLink {
            href: "blob:memory/404",
            file_name: "x.csv",
            hidden: true,
        };

        let err = host.activate_link(&link).unwrap_err();
        assert!(err.to_string().contains("Unknown object URL"));
    }

    #[test]
    fn test_revoke_forgets_blob() {
        let mut host = MemoryHost::new();
        let url = host.create_object_url(Blob::csv("a")).unwrap();
        assert_eq!(host.live_urls(), 1);

        host.revoke_object_url(url);
        assert_eq!(host.live_urls(), 0);
        assert_eq!(host.revoked(), ["blob:memory/1".to_string()]);
    }
}
