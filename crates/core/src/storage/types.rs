//! File records and backend requests.

use bytes::Bytes;

/// A file as handed over by the host for a single upload or delete.
#[derive(Debug, Clone, Default)]
pub struct FileRecord {
    /// Content-derived base name.
    pub hash: String,
    /// Extension including the dot, possibly empty.
    pub ext: String,
    /// Optional subdirectory.
    pub path: Option<String>,
    /// Payload; required for upload only.
    pub buffer: Option<Bytes>,
    /// Content type.
    pub mime: Option<String>,
    /// Public URL, set by upload.
    pub url: Option<String>,
}

impl FileRecord {
    /// Create a record with a hash and extension.
    #[must_use]
    pub fn new(hash: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            ext: ext.into(),
            ..Self::default()
        }
    }

    /// Set the subdirectory.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the payload and its content type.
    #[must_use]
    pub fn with_content(mut self, buffer: impl Into<Bytes>, mime: impl Into<String>) -> Self {
        self.buffer = Some(buffer.into());
        self.mime = Some(mime.into());
        self
    }

    /// Set the public URL, as when the host reloads a stored record.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A single-shot object write.
///
/// The object is always written `public-read`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    /// Object key within the bucket.
    pub key: String,
    /// Object body.
    pub body: Bytes,
    /// Content type header.
    pub content_type: Option<String>,
    /// Cache-Control header.
    pub cache_control: String,
}
