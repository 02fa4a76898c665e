//! Object backends.
//!
//! [`ObjectBackend`] is the seam between the provider and the store. The
//! production implementation is [`S3Backend`]; each instance owns its own
//! client, credentials and region, so several providers can coexist in one
//! process.

use std::future::Future;

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use super::config::ConnectionParams;
use super::error::BackendError;
use super::types::PutObjectRequest;

/// Name reported by the static credentials provider.
const CREDENTIALS_PROVIDER: &str = "cloudcube";

/// Minimal object store operations the provider needs.
///
/// Implementations must be safe to call concurrently.
pub trait ObjectBackend: Send + Sync {
    /// Write an object, publicly readable.
    fn put_object(
        &self,
        request: PutObjectRequest,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Remove an object.
    fn delete_object(&self, key: &str) -> impl Future<Output = Result<(), BackendError>> + Send;
}

/// AWS S3 backend bound to one bucket.
#[derive(Debug, Clone)]
pub struct S3Backend {
    client: Client,
    bucket: String,
}

impl S3Backend {
    /// Build a client from resolved connection parameters.
    ///
    /// Credentials are always the configured static keys. The region is set
    /// when the bucket is a known CloudCube bucket; otherwise the SDK's default
    /// region chain (`AWS_REGION`, profile, IMDS) decides.
    pub async fn connect(params: &ConnectionParams) -> Self {
        let credentials = Credentials::new(
            params.access_key_id(),
            params.secret_access_key(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).credentials_provider(credentials);
        if let Some(region) = params.region() {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;

        Self::from_client(Client::new(&sdk_config), params.bucket())
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Bucket this backend writes to.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl ObjectBackend for S3Backend {
    async fn put_object(&self, request: PutObjectRequest) -> Result<(), BackendError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(request.key)
            .body(ByteStream::from(request.body))
            .acl(ObjectCannedAcl::PublicRead)
            .set_content_type(request.content_type)
            .cache_control(request.cache_control)
            .send()
            .await?;
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), BackendError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }
}
