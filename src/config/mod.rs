//! Client configuration: typed settings with layered precedence
//! (built-in defaults → optional file → environment).

use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const ENV_PREFIX: &str = "BREZZA";
const CONFIG_FILE_ENV: &str = "BREZZA_CONFIG_FILE";

const ADMIN_CACHE_TTL_SECS: u64 = 2 * 60;
const PUBLIC_CACHE_TTL_SECS: u64 = 5 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid api_base_url `{value}`: {source}")]
    BaseUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Which frontend this process is.
///
/// The admin dashboard tolerates less staleness than the public blog, so the
/// profile picks the default cache TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    Admin,
    PublicBlog,
}

impl Profile {
    pub fn default_cache_ttl(self) -> Duration {
        match self {
            Profile::Admin => Duration::from_secs(ADMIN_CACHE_TTL_SECS),
            Profile::PublicBlog => Duration::from_secs(PUBLIC_CACHE_TTL_SECS),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    pub default_ttl: Duration,
}

impl CacheConfig {
    pub fn admin() -> Self {
        Self {
            default_ttl: Profile::Admin.default_cache_ttl(),
        }
    }

    pub fn public_blog() -> Self {
        Self {
            default_ttl: Profile::PublicBlog.default_cache_ttl(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    api_base_url: String,
    profile: Profile,
    secure_cookies: bool,
    cache_ttl_secs: Option<u64>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile: Profile::Admin,
            secure_cookies: false,
            cache_ttl_secs: None,
        }
    }
}

/// Fully validated client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub profile: Profile,
    /// Mark the session cookie `Secure`. Only enabled on production HTTPS
    /// deployments; local plain-HTTP testing must keep it off.
    pub secure_cookies: bool,
    pub cache: CacheConfig,
}

impl ClientConfig {
    /// Load from defaults, the optional file named by `BREZZA_CONFIG_FILE`,
    /// and `BREZZA_*` environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::var(CONFIG_FILE_ENV).ok())
    }

    pub fn load_from(config_file: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("profile", "admin")?
            .set_default("secure_cookies", false)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(&path));
        }

        let raw: RawConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(&raw.api_base_url).map_err(|source| {
            ConfigError::BaseUrl {
                value: raw.api_base_url.clone(),
                source,
            }
        })?;

        let default_ttl = raw
            .cache_ttl_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| raw.profile.default_cache_ttl());

        Ok(Self {
            api_base_url,
            profile: raw.profile,
            secure_cookies: raw.secure_cookies,
            cache: CacheConfig { default_ttl },
        })
    }
}
