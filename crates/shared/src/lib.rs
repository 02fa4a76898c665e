//! Shared configuration for the CloudCube storage adapter.
//!
//! This crate holds the raw, host-supplied provider settings and the layered
//! loader that reads them from `.env`, config files, and the environment.
//! Resolution into connection parameters lives in `cloudcube-core`.

pub mod config;

pub use config::{DeleteKeySource, ProviderConfig};
