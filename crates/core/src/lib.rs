//! CloudCube storage provider.
//!
//! Glue between a host media framework and an S3-compatible object store:
//! configuration resolution, object key derivation, and single-shot
//! upload/delete calls through the AWS SDK.
//!
//! # Modules
//!
//! - `storage` - Provider, S3 backend, key and URL handling

pub mod storage;

pub use cloudcube_shared::{DeleteKeySource, ProviderConfig};
