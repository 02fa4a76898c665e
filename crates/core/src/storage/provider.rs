//! Host-facing provider contract and metadata.

use std::future::Future;

use super::error::StorageResult;
use super::types::FileRecord;

/// Identifier hosts register this provider under.
pub const PROVIDER_ID: &str = "aws-s3-cloudcubed";

/// Human-readable provider name.
pub const PROVIDER_NAME: &str = "CloudCube/AWS-S3";

/// Kind of input an admin UI should render for a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFieldKind {
    /// Free text.
    Text,
}

/// A setting the host asks the operator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthField {
    /// Config key.
    pub key: &'static str,
    /// Label shown to the operator.
    pub label: &'static str,
    /// Input kind.
    pub kind: AuthFieldKind,
}

/// Settings shown in host admin UIs, in display order.
pub const AUTH_FIELDS: &[AuthField] = &[
    AuthField {
        key: "public",
        label: "Access API Token",
        kind: AuthFieldKind::Text,
    },
    AuthField {
        key: "private",
        label: "Secret Access Token",
        kind: AuthFieldKind::Text,
    },
    AuthField {
        key: "cubeUrl",
        label: "Cube URL",
        kind: AuthFieldKind::Text,
    },
    AuthField {
        key: "basePath",
        label: "Base Path",
        kind: AuthFieldKind::Text,
    },
];

/// Upload provider contract consumed by the host.
///
/// Both operations are single-shot: no retries, no partial success.
pub trait UploadProvider: Send + Sync {
    /// Store the file and set `file.url` to its public URL.
    fn upload(&self, file: &mut FileRecord) -> impl Future<Output = StorageResult<()>> + Send;

    /// Remove a previously uploaded file.
    fn delete(&self, file: &FileRecord) -> impl Future<Output = StorageResult<()>> + Send;
}
