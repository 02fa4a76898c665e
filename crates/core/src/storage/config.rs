//! Connection parameter resolution.

use std::fmt;

use cloudcube_shared::{DeleteKeySource, ProviderConfig};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ConfigurationError;

static CUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(.+)\.s3\.amazonaws\.com/(.+)$").expect("cube url pattern is valid")
});

/// Buckets CloudCube provisions, and the regions they live in.
const BUCKET_REGIONS: &[(&str, &str)] = &[
    ("cloud-cube", "us-east-1"),
    ("cloud-cube-eu", "eu-west-1"),
    ("cloud-cube-jp", "ap-northeast-1"),
];

/// Look up the AWS region of a known CloudCube bucket.
///
/// Unknown buckets return `None`; the SDK's own region chain applies then.
#[must_use]
pub fn region_for_bucket(bucket: &str) -> Option<&'static str> {
    BUCKET_REGIONS
        .iter()
        .find(|(name, _)| *name == bucket)
        .map(|(_, region)| *region)
}

/// Immutable connection parameters, resolved once per provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    bucket: String,
    cube_prefix: String,
    region: Option<&'static str>,
    access_key_id: String,
    secret_access_key: String,
    base_path: Option<String>,
    key_source: DeleteKeySource,
}

impl ConnectionParams {
    /// Resolve against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the cube URL is malformed, or if `use_env` is set and
    /// a named variable is missing.
    pub fn resolve(config: &ProviderConfig) -> Result<Self, ConfigurationError> {
        Self::resolve_with(config, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ConnectionParams::resolve`].
    pub fn resolve_with<F>(config: &ProviderConfig, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |field: &'static str, raw: &str| -> Result<String, ConfigurationError> {
            if !config.uses_env() {
                return Ok(raw.to_string());
            }
            lookup(raw.trim())
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigurationError::MissingEnvVar {
                    field,
                    var: raw.trim().to_string(),
                })
        };

        let cube_url = value("cube_url", &config.cube_url)?;
        let access_key_id = value("public", &config.public_key)?;
        let secret_access_key = value("private", &config.private_key)?;

        let (bucket, cube_prefix) = parse_cube_url(&cube_url)?;

        Ok(Self {
            region: region_for_bucket(&bucket),
            bucket,
            cube_prefix,
            access_key_id: access_key_id.trim().to_string(),
            secret_access_key: secret_access_key.trim().to_string(),
            base_path: config
                .base_path
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            key_source: config.delete_key,
        })
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Path segment every object of this cube lives under.
    #[must_use]
    pub fn cube_prefix(&self) -> &str {
        &self.cube_prefix
    }

    /// Region of the bucket, if it is a known CloudCube bucket.
    #[must_use]
    pub fn region(&self) -> Option<&'static str> {
        self.region
    }

    /// Access key ID.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key.
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Optional base path.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Where deletes take their key from.
    #[must_use]
    pub fn key_source(&self) -> DeleteKeySource {
        self.key_source
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("bucket", &self.bucket)
            .field("cube_prefix", &self.cube_prefix)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("base_path", &self.base_path)
            .field("key_source", &self.key_source)
            .finish()
    }
}

/// Split a cube URL into `(bucket, cube_prefix)`.
fn parse_cube_url(url: &str) -> Result<(String, String), ConfigurationError> {
    let url = url.trim();
    let invalid = || ConfigurationError::InvalidCubeUrl {
        url: url.to_string(),
    };
    let caps = CUBE_URL.captures(url).ok_or_else(invalid)?;

    let bucket = caps[1].trim();
    if bucket.is_empty() {
        return Err(invalid());
    }
    Ok((bucket.to_string(), caps[2].to_string()))
}
