//! CloudCube / AWS S3 storage provider.
//!
//! Uploads files to, and deletes them from, a CloudCube cube: a prefix inside
//! a shared S3 bucket. The host calls [`CubeStorage::init`] once, then
//! [`UploadProvider::upload`] and [`UploadProvider::delete`] per file.
//!
//! ```text
//! ProviderConfig ──resolve──▶ ConnectionParams ──connect──▶ S3Backend
//!                                    │                        │
//!                                    ▼                        ▼
//!              FileRecord ──▶ object_key ──▶ PutObject / DeleteObject
//! ```

mod backend;
mod config;
mod error;
mod key;
mod provider;
mod service;
mod types;


pub use backend::{ObjectBackend, S3Backend};
pub use config::{ConnectionParams, region_for_bucket};
pub use error::{BackendError, ConfigurationError, StorageError, StorageResult};
pub use key::{UrlKeyParser, object_key, public_url};
pub use provider::{
    AUTH_FIELDS, AuthField, AuthFieldKind, PROVIDER_ID, PROVIDER_NAME, UploadProvider,
};
pub use service::CubeStorage;
pub use types::{FileRecord, PutObjectRequest};
