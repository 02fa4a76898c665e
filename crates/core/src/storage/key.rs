//! Object keys and public URLs.
//!
//! Key layout: `{cube_prefix}/{base_path}/{path}/{hash}{ext}`, where
//! `base_path` and `path` are skipped when absent or empty. Keys are stored
//! raw; URLs carry each key segment percent-encoded.

use std::borrow::Cow;

use regex::Regex;

use super::types::FileRecord;

/// Build the object key for a file.
#[must_use]
pub fn object_key(cube_prefix: &str, base_path: Option<&str>, file: &FileRecord) -> String {
    let mut segments = vec![cube_prefix];
    segments.extend(
        [base_path, file.path.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty()),
    );

    format!("{}/{}{}", segments.join("/"), file.hash, file.ext)
}

/// Public URL of an object in a bucket.
#[must_use]
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{}", encode_path(key))
}

/// Percent-encode every segment of a `/`-separated path.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Recovers object keys from public URLs of one cube.
#[derive(Debug, Clone)]
pub struct UrlKeyParser {
    pattern: Regex,
}

impl UrlKeyParser {
    /// Build a parser for URLs under `cube_prefix`.
    ///
    /// # Panics
    ///
    /// Does not panic in practice: the prefix is regex-escaped.
    #[must_use]
    pub fn new(cube_prefix: &str) -> Self {
        let pattern = format!(
            r"^https://[^/]+/({}/.*)$",
            regex::escape(&encode_path(cube_prefix))
        );
        Self {
            pattern: Regex::new(&pattern).expect("escaped cube prefix always compiles"),
        }
    }

    /// Extract the decoded object key, or `None` if the URL belongs
    /// elsewhere or does not decode to UTF-8.
    #[must_use]
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        let encoded = self.pattern.captures(url)?.get(1)?.as_str();
        urlencoding::decode(encoded).ok().map(Cow::into_owned)
    }
}
