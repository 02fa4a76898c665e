//! CloudCube storage provider.

use cloudcube_shared::{DeleteKeySource, ProviderConfig};
use tracing::{debug, error, info, warn};

use super::backend::{ObjectBackend, S3Backend};
use super::config::ConnectionParams;
use super::error::{StorageError, StorageResult};
use super::key::{UrlKeyParser, object_key, public_url};
use super::provider::UploadProvider;
use super::types::{FileRecord, PutObjectRequest};

/// One year, in seconds.
const MAX_AGE_SECS: u64 = 31_536_000;

/// Upload/delete provider for one CloudCube cube.
///
/// Holds only immutable state, so a single instance can serve concurrent
/// operations.
#[derive(Debug)]
pub struct CubeStorage<B = S3Backend> {
    params: ConnectionParams,
    urls: UrlKeyParser,
    backend: B,
}

impl CubeStorage<S3Backend> {
    /// Resolve the configuration and connect to S3.
    ///
    /// Configuration is validated before any client is built.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Configuration`] if the configuration cannot be
    /// resolved.
    pub async fn init(config: &ProviderConfig) -> StorageResult<Self> {
        let params = ConnectionParams::resolve(config)?;
        let backend = S3Backend::connect(&params).await;
        Ok(Self::with_backend(params, backend))
    }
}

impl<B: ObjectBackend> CubeStorage<B> {
    /// Create a provider over an arbitrary backend.
    #[must_use]
    pub fn with_backend(params: ConnectionParams, backend: B) -> Self {
        info!(
            bucket = %params.bucket(),
            cube_prefix = %params.cube_prefix(),
            region = params.region().unwrap_or("<sdk default>"),
            base_path = params.base_path().unwrap_or(""),
            "CloudCube storage provider initialized"
        );

        Self {
            urls: UrlKeyParser::new(params.cube_prefix()),
            params,
            backend,
        }
    }

    /// Connection parameters in use.
    #[must_use]
    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Backend in use.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Object key a file is stored under.
    #[must_use]
    pub fn object_key(&self, file: &FileRecord) -> String {
        object_key(self.params.cube_prefix(), self.params.base_path(), file)
    }

    /// Public URL of an object key.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        public_url(self.params.bucket(), key)
    }

    /// Key to delete for a file, per the configured key source.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::MismatchedUrl`] if the key comes from the URL
    /// and the URL is missing or outside this cube.
    pub fn delete_key(&self, file: &FileRecord) -> StorageResult<String> {
        match self.params.key_source() {
            DeleteKeySource::Derived => Ok(self.object_key(file)),
            DeleteKeySource::Url => {
                let url = file.url.as_deref().unwrap_or_default();
                self.urls
                    .key_from_url(url)
                    .ok_or_else(|| StorageError::mismatched_url(url, self.params.cube_prefix()))
            }
        }
    }
}

impl<B: ObjectBackend> UploadProvider for CubeStorage<B> {
    async fn upload(&self, file: &mut FileRecord) -> StorageResult<()> {
        let Some(body) = file.buffer.clone() else {
            return Err(StorageError::MissingBuffer {
                hash: file.hash.clone(),
            });
        };

        let key = self.object_key(file);
        debug!(key = %key, size = body.len(), "Uploading file");

        let request = PutObjectRequest {
            key: key.clone(),
            body,
            content_type: file.mime.clone(),
            cache_control: format!("max-age={MAX_AGE_SECS}"),
        };

        if let Err(source) = self.backend.put_object(request).await {
            error!(key = %key, error = %source, "Upload rejected by backend");
            return Err(StorageError::upload(key, source));
        }

        file.url = Some(self.public_url(&key));
        Ok(())
    }

    async fn delete(&self, file: &FileRecord) -> StorageResult<()> {
        let key = match self.delete_key(file) {
            Ok(key) => key,
            Err(err) => {
                warn!(hash = %file.hash, error = %err, "Refusing to delete file");
                return Err(err);
            }
        };

        debug!(key = %key, "Deleting file");

        self.backend.delete_object(&key).await.map_err(|source| {
            error!(key = %key, error = %source, "Delete rejected by backend");
            StorageError::delete(key.clone(), source)
        })
    }
}
