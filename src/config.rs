use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use chrono_tz::Tz;
use config::{Environment, File, FileFormat, Map};
use serde::Deserialize;
use todaytag_core::constants::{DEFAULT_CREDENTIAL_ENV, DEFAULT_TODAY_CATEGORY_ID};
use todaytag_core::{CategoryId, TodayTag};
use todaytag_provider_tribe::{DEFAULT_PER_PAGE, TribeConfig};
use url::Url;

const DEFAULT_API_ROOT: &str = "https://klimateam-schoental.de/wp-json/tribe/events/v1/";
const ENV_PREFIX: &str = "TODAYTAG";
/// Overrides the config file location.
const CONFIG_PATH_ENV: &str = "TODAYTAG_CONFIG";

/// Settings as written in config.toml or the environment.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_api_root")]
    api_root: String,

    #[serde(default = "default_today_category_id")]
    today_category_id: u64,

    /// IANA name; the system zone when unset.
    #[serde(default)]
    timezone: Option<String>,

    #[serde(default = "default_per_page")]
    per_page: u32,

    /// Humantime duration, e.g. "30s".
    #[serde(default = "default_request_timeout")]
    request_timeout: String,

    /// Environment variable holding the raw `user:password` pair.
    #[serde(default = "default_credential_env")]
    credential_env: String,

    #[serde(default)]
    dry_run: bool,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_today_category_id() -> u64 {
    DEFAULT_TODAY_CATEGORY_ID
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_request_timeout() -> String {
    "30s".to_string()
}

fn default_credential_env() -> String {
    DEFAULT_CREDENTIAL_ENV.to_string()
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_root: Url,
    pub tag: TodayTag,
    /// Zone in which "today" is determined.
    pub timezone: Tz,
    pub per_page: u32,
    pub request_timeout: Duration,
    pub credential_env: String,
    pub dry_run: bool,
}

impl Config {
    pub fn tribe_config(&self) -> TribeConfig {
        TribeConfig {
            api_root: self.api_root.clone(),
            per_page: self.per_page,
            timeout: self.request_timeout,
            fallback_timezone: self.timezone,
        }
    }
}

/// Get the config file path ($TODAYTAG_CONFIG or ~/.config/todaytag/config.toml)
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("todaytag");
    Ok(config_dir.join("config.toml"))
}

/// Load config from the config file (optional) and the process environment.
pub fn load_config() -> Result<Config> {
    load_from(&config_path()?, None)
}

/// Load config from `path`, then overlay `TODAYTAG_*` variables.
///
/// `env` replaces the process environment when given.
pub fn load_from(path: &Path, env: Option<Map<String, String>>) -> Result<Config> {
    let raw: RawConfig = config::Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(env))
        .build()
        .and_then(|c| c.try_deserialize())
        .with_context(|| format!("Failed to read config at {}", path.display()))?;

    validate(raw)
}

fn validate(raw: RawConfig) -> Result<Config> {
    let api_root = Url::parse(&raw.api_root)
        .with_context(|| format!("api_root '{}' is not a valid URL", raw.api_root))?;
    if !matches!(api_root.scheme(), "http" | "https") {
        bail!("api_root must be an http(s) URL, got '{}'", raw.api_root);
    }

    let timezone = match raw.timezone.as_deref() {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| anyhow!("Unknown timezone '{}'", name))?,
        None => system_timezone(),
    };

    if raw.per_page == 0 {
        bail!("per_page must be at least 1");
    }

    let request_timeout = humantime::parse_duration(&raw.request_timeout)
        .with_context(|| format!("request_timeout '{}' is not a duration", raw.request_timeout))?;

    if raw.credential_env.is_empty() {
        bail!("credential_env must name an environment variable");
    }

    Ok(Config {
        api_root,
        tag: TodayTag::new(CategoryId(raw.today_category_id)),
        timezone,
        per_page: raw.per_page,
        request_timeout,
        credential_env: raw.credential_env,
        dry_run: raw.dry_run,
    })
}

/// The zone the host is configured with, UTC if it cannot be determined.
fn system_timezone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(chrono_tz::UTC)
}
