//! Offering CSV text to the user as a file download
//!
//! The host environment is abstracted behind [`DownloadHost`]: it turns a
//! blob into an ephemeral URL, activates a hidden download link for it and
//! releases the URL afterwards. [`download_csv`] drives that sequence.

pub mod fs;
pub mod memory;

pub use fs::FileSystemHost;
pub use memory::{MemoryHost, OfferedFile};

use crate::error::ExportResult;
use tracing::debug;

/// MIME type attached to CSV downloads
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Immutable in-memory bytes with a MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// UTF-8 CSV blob
    pub fn csv(content: &str) -> Self {
        Self::new(content.as_bytes(), CSV_MIME_TYPE)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Ephemeral locator for a blob held by the host
///
/// Not `Clone`: revoking consumes it, so a URL is released at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A hidden link that downloads `href` under `file_name` when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadLink<'a> {
    pub href: &'a str,
    pub file_name: &'a str,
    pub hidden: bool,
}

/// Host capability for offering files to the user
pub trait DownloadHost {
    /// Whether links with a download target are supported at all
    fn supports_download(&self) -> bool;

    /// Register a blob and return an ephemeral URL for it
    fn create_object_url(&mut self, blob: Blob) -> ExportResult<ObjectUrl>;

    /// Attach the link, click it and detach it again
    fn activate_link(&mut self, link: &DownloadLink<'_>) -> ExportResult<()>;

    /// Release a URL obtained from [`DownloadHost::create_object_url`]
    fn revoke_object_url(&mut self, url: ObjectUrl);
}

/// Offer `csv_content` as a download named `file_name`
///
/// Does nothing when the host cannot download files. The object URL is
/// revoked after activation, including when activation fails.
pub fn download_csv<H>(host: &mut H, csv_content: &str, file_name: &str) -> ExportResult<()>
where
    H: DownloadHost + ?Sized,
{
    let blob = Blob::csv(csv_content);

    if !host.supports_download() {
        debug!(file_name, "host does not support downloads, skipping");
        return Ok(());
    }

    let size = blob.len();
    let url = host.create_object_url(blob)?;
    let link = DownloadLink {
        href: url.as_str(),
        file_name,
        hidden: true,
    };
    let activated = host.activate_link(&link);
    host.revoke_object_url(url);

    activated?;
    debug!(file_name, bytes = size, "offered CSV download");
    Ok(())
}
