use std::path::PathBuf;

use wedding_core::error::CoreError;
use wedding_core::wedding::WeddingConfig;
use wedding_db::store::DEFAULT_LOCAL_PATH;
use wedding_db::StorageConfig;

/// Errors raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Failed to read wedding configuration {path}: {source}")]
    WeddingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Wedding(#[from] CoreError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Storage
/// selection is resolved here, once, and never re-read.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Resolved RSVP storage backend.
    pub storage: StorageConfig,
    /// Optional JSON file overriding the built-in wedding configuration.
    pub wedding_config_path: Option<PathBuf>,
    /// Root of static assets; gallery images live in `{public_dir}/gallery`.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3000`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `SUPABASE_URL`         | unset                    |
    /// | `SUPABASE_ANON_KEY`    | unset                    |
    /// | `RSVP_DATA_PATH`       | `data/rsvps.json`        |
    /// | `WEDDING_CONFIG_PATH`  | unset (built-in)         |
    /// | `PUBLIC_DIR`           | `public`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "u16", 3000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30u64)?;

        let storage = StorageConfig::resolve(
            lookup("SUPABASE_URL"),
            lookup("SUPABASE_ANON_KEY"),
            lookup("RSVP_DATA_PATH").unwrap_or_else(|| DEFAULT_LOCAL_PATH.into()),
        );

        let wedding_config_path = lookup("WEDDING_CONFIG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            wedding_config_path,
            public_dir,
        })
    }

    /// Load the wedding configuration: the override file if configured,
    /// the built-in document otherwise.
    pub fn load_wedding_config(&self) -> Result<WeddingConfig, ConfigError> {
        let Some(path) = &self.wedding_config_path else {
            return Ok(WeddingConfig::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::WeddingRead {
            path: path.clone(),
            source,
        })?;
        Ok(WeddingConfig::from_json(&raw)?)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var,
                expected,
                value,
            }),
    }
}
