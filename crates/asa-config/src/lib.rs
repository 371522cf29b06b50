//! Profile configuration for asactl.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext), and
//! translation to `asa_core::DriverConfig`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use asa_core::{ApiGeneration, DEFAULT_PORT, DriverConfig, DriverOptions, TlsMode};

const KEYRING_SERVICE: &str = "asactl";
const ENV_PREFIX: &str = "ASA_";
const USERNAME_ENV: &str = "ASA_USERNAME";
const PASSWORD_ENV: &str = "ASA_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is given on the command line.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named device profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile, falling back to `default_profile`.
    pub fn profile(&self, name: Option<&str>) -> Result<(String, &Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get(name)
            .map(|p| (name.to_owned(), p))
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Skip certificate verification. Appliances ship self-signed certs.
    #[serde(default = "default_insecure")]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: default_insecure(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_insecure() -> bool {
    true
}
fn default_timeout() -> u64 {
    60
}

/// A named device profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Hostname or address (e.g., "10.0.0.1").
    pub host: String,

    /// HTTPS port, 443 when unset.
    pub port: Option<u16>,

    #[serde(default)]
    pub api: ApiGeneration,

    pub username: Option<String>,

    /// Plaintext password. Prefer the keyring or `password_env`.
    pub password: Option<String>,

    /// Environment variable holding the password.
    pub password_env: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override `defaults.insecure`.
    pub insecure: Option<bool>,

    /// Override `defaults.timeout` (seconds).
    pub timeout: Option<u64>,

    /// Override the REST interface listings queried by `get_interfaces`.
    pub interface_endpoints: Option<Vec<String>>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "asa-driver", "asactl").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("asactl");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
///
/// Environment variables override file values, with `__` separating
/// nesting levels: `ASA_DEFAULTS__TIMEOUT=30`,
/// `ASA_PROFILES__LAB__HOST=10.0.0.1`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution ───────────────────────────────────────────

fn keyring_password(profile_name: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .ok()?
        .get_password()
        .ok()
}

/// Store a profile password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    let keyring_err = |e: keyring::Error| ConfigError::Validation {
        field: "keyring".into(),
        reason: e.to_string(),
    };
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .map_err(keyring_err)?
        .set_password(password)
        .map_err(keyring_err)
}

/// Resolve username and password for a profile.
///
/// Password order: the profile's `password_env` variable, `ASA_PASSWORD`,
/// the system keyring, then the plaintext `password` field.
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<(String, SecretString), ConfigError> {
    resolve_credentials_with(
        profile,
        profile_name,
        |var| std::env::var(var).ok(),
        keyring_password,
    )
}

fn resolve_credentials_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl Fn(&str) -> Option<String>,
) -> Result<(String, SecretString), ConfigError> {
    let missing = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile
        .username
        .clone()
        .or_else(|| env(USERNAME_ENV))
        .ok_or_else(missing)?;

    let password = profile
        .password_env
        .as_deref()
        .and_then(&env)
        .or_else(|| env(PASSWORD_ENV))
        .or_else(|| keyring(profile_name))
        .or_else(|| profile.password.clone())
        .ok_or_else(missing)?;

    Ok((username, SecretString::from(password)))
}

// ── DriverConfig translation ────────────────────────────────────────

/// Build a `DriverConfig` from a profile and already-resolved credentials.
pub fn driver_config(
    profile: &Profile,
    defaults: &Defaults,
    username: &str,
    password: SecretString,
) -> Result<DriverConfig, ConfigError> {
    if profile.host.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: "must not be empty".into(),
        });
    }

    let insecure = profile.insecure.unwrap_or(defaults.insecure);
    let tls = match (&profile.ca_cert, insecure) {
        (Some(path), false) => TlsMode::CustomCa(path.clone()),
        (_, true) => TlsMode::DangerAcceptInvalid,
        (None, false) => TlsMode::System,
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    let options = DriverOptions {
        port: profile.port.unwrap_or(DEFAULT_PORT),
        api: profile.api,
        tls,
        interface_endpoints: profile.interface_endpoints.clone(),
    };

    DriverConfig::new(&profile.host, username, password, timeout, options).map_err(|e| {
        ConfigError::Validation {
            field: "host".into(),
            reason: e.to_string(),
        }
    })
}

/// Resolve credentials and build a `DriverConfig` for a profile.
pub fn profile_to_driver_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<DriverConfig, ConfigError> {
    let (username, password) = resolve_credentials(profile, profile_name)?;
    driver_config(profile, defaults, &username, password)
}
