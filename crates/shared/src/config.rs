//! Provider configuration management.

use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Where `delete` takes the object key from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteKeySource {
    /// Parse the key out of the stored public URL.
    #[default]
    Url,
    /// Re-derive the key from the file record, the same way upload does.
    Derived,
}

/// Raw provider settings as supplied by the host.
///
/// Values are not validated here; `cloudcube-core` resolves them into
/// connection parameters and rejects malformed cube URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// Access key ID, or the name of the variable holding it.
    #[serde(rename = "public")]
    pub public_key: String,
    /// Secret access key, or the name of the variable holding it.
    #[serde(rename = "private")]
    pub private_key: String,
    /// Cube URL, `https://<bucket>.s3.amazonaws.com/<cube>`.
    #[serde(alias = "cubeUrl", alias = "bucketUrl", alias = "bucket_url")]
    pub cube_url: String,
    /// Extra namespace segment placed after the cube prefix.
    #[serde(default, alias = "basePath")]
    pub base_path: Option<String>,
    /// Treat `public`, `private` and `cube_url` as environment variable names.
    #[serde(default, alias = "useEnv", deserialize_with = "bool_like")]
    pub use_env: Option<bool>,
    /// Key source for deletes.
    #[serde(default, alias = "deleteKey")]
    pub delete_key: DeleteKeySource,
}

impl ProviderConfig {
    /// Environment variable prefix used by [`ProviderConfig::load`].
    pub const ENV_PREFIX: &'static str = "CLOUDCUBE";

    /// Create a config with literal credentials and cube URL.
    #[must_use]
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        cube_url: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            cube_url: cube_url.into(),
            ..Self::default()
        }
    }

    /// Set the base path.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Read credentials and cube URL through environment variables.
    #[must_use]
    pub fn with_use_env(mut self, use_env: bool) -> Self {
        self.use_env = Some(use_env);
        self
    }

    /// Set the key source for deletes.
    #[must_use]
    pub fn with_delete_key(mut self, source: DeleteKeySource) -> Self {
        self.delete_key = source;
        self
    }

    /// Whether values are environment variable names.
    #[must_use]
    pub fn uses_env(&self) -> bool {
        self.use_env.unwrap_or(false)
    }

    /// Loads provider configuration from `.env`, config files and environment.
    ///
    /// Sources, later ones winning: `config/cloudcube.*`,
    /// `config/cloudcube-{RUN_MODE}.*`, then `CLOUDCUBE_*` variables
    /// (e.g. `CLOUDCUBE_CUBE_URL`, `CLOUDCUBE_USE_ENV`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from("config")
    }

    /// Same as [`ProviderConfig::load`], reading config files from `dir`
    /// and skipping `.env`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        // `File::with_name` reads a `.` suffix as the format extension.
        let base = dir.join("cloudcube");
        let overlay = dir.join(format!("cloudcube-{run_mode}"));

        let config = config::Config::builder()
            .add_source(config::File::with_name(&base.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&overlay.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Accepts `true`/`false` as well as the strings hosts tend to pass through.
fn bool_like<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
    }

    match Option::<BoolLike>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolLike::Bool(b)) => Ok(Some(b)),
        Some(BoolLike::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" | "" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean for use_env, got '{other}'"
            ))),
        },
    }
}
