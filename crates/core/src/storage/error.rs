//! Storage error types.

use thiserror::Error;

/// Error type returned by object backends, passed through unchanged.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias using `StorageError`.
pub type StorageResult<T> = Result<T, StorageError>;

/// Provider configuration errors. Raised by `init`, before any client exists.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Cube URL does not have the `https://<bucket>.s3.amazonaws.com/<cube>` shape.
    #[error("cube URL '{url}' does not match https://<bucket>.s3.amazonaws.com/<cube>")]
    InvalidCubeUrl {
        /// The rejected URL.
        url: String,
    },

    /// Environment indirection is on but the named variable is unset or blank.
    #[error("environment variable '{var}' for '{field}' is not set")]
    MissingEnvVar {
        /// Config field that named the variable.
        field: &'static str,
        /// Variable name.
        var: String,
    },
}

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Provider configuration could not be resolved.
    #[error("storage configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Backend rejected the upload.
    #[error("upload of '{key}' failed: {source}")]
    Upload {
        /// Object key that was being written.
        key: String,
        /// Backend error.
        #[source]
        source: BackendError,
    },

    /// Backend rejected the delete.
    #[error("delete of '{key}' failed: {source}")]
    Delete {
        /// Object key that was being removed.
        key: String,
        /// Backend error.
        #[source]
        source: BackendError,
    },

    /// Stored URL does not belong to the configured bucket and cube prefix.
    #[error("file url '{url}' does not match configured cube prefix '{cube_prefix}'")]
    MismatchedUrl {
        /// URL found on the file record (empty when it had none).
        url: String,
        /// Cube prefix this provider is configured with.
        cube_prefix: String,
    },

    /// Upload called on a record without a payload.
    #[error("file '{hash}' has no buffer to upload")]
    MissingBuffer {
        /// Hash of the offending record.
        hash: String,
    },
}

impl StorageError {
    /// Create an upload error.
    #[must_use]
    pub fn upload(key: impl Into<String>, source: BackendError) -> Self {
        Self::Upload {
            key: key.into(),
            source,
        }
    }

    /// Create a delete error.
    #[must_use]
    pub fn delete(key: impl Into<String>, source: BackendError) -> Self {
        Self::Delete {
            key: key.into(),
            source,
        }
    }

    /// Create a mismatched URL error.
    #[must_use]
    pub fn mismatched_url(url: impl Into<String>, cube_prefix: impl Into<String>) -> Self {
        Self::MismatchedUrl {
            url: url.into(),
            cube_prefix: cube_prefix.into(),
        }
    }

    /// Short, stable error code for host-side reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Upload { .. } => "UPLOAD_ERROR",
            Self::Delete { .. } => "DELETE_ERROR",
            Self::MismatchedUrl { .. } => "MISMATCHED_URL",
            Self::MissingBuffer { .. } => "MISSING_BUFFER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_codes() {
        let config: StorageError = ConfigurationError::InvalidCubeUrl {
            url: "nope".into(),
        }
        .into();
        assert_eq!(config.error_code(), "CONFIGURATION_ERROR");
        assert_eq!(
            StorageError::upload("k", "boom".into()).error_code(),
            "UPLOAD_ERROR"
        );
        assert_eq!(
            StorageError::delete("k", "boom".into()).error_code(),
            "DELETE_ERROR"
        );
        assert_eq!(
            StorageError::mismatched_url("u", "c").error_code(),
            "MISMATCHED_URL"
        );
        assert_eq!(
            StorageError::MissingBuffer { hash: "h".into() }.error_code(),
            "MISSING_BUFFER"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigurationError::MissingEnvVar {
                field: "public",
                var: "S3_KEY".into(),
            }
            .to_string(),
            "environment variable 'S3_KEY' for 'public' is not set"
        );
        assert_eq!(
            StorageError::mismatched_url("https://elsewhere/x", "mycube").to_string(),
            "file url 'https://elsewhere/x' does not match configured cube prefix 'mycube'"
        );
        assert_eq!(
            StorageError::upload("mycube/a.png", "access denied".into()).to_string(),
            "upload of 'mycube/a.png' failed: access denied"
        );
    }

    #[test]
    fn test_backend_error_is_source() {
        let err = StorageError::delete("mycube/a.png", "no such bucket".into());
        let source = err.source().expect("should carry source");
        assert_eq!(source.to_string(), "no such bucket");
    }
}
