//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use asa_config::ConfigError;
use asa_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const DEVICE: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to {host}: {reason}")]
    #[diagnostic(
        code(asa::connection_failed),
        help(
            "Check that the HTTPS management interface is enabled and reachable.\n\
             Self-signed certificates need --insecure (-k) or ca_cert in the profile."
        )
    )]
    ConnectionFailed { host: String, reason: String },

    #[error("Request to {host} timed out")]
    #[diagnostic(
        code(asa::timeout),
        help("Increase the timeout with --timeout or check the device load.")
    )]
    Timeout { host: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed for {host}: {reason}")]
    #[diagnostic(
        code(asa::auth_failed),
        help(
            "Verify the username and password.\n\
             Run: asactl profiles set-password <profile>"
        )
    )]
    AuthFailed { host: String, reason: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(asa::no_credentials),
        help(
            "Set username and password in the profile, store the password with\n\
             `asactl profiles set-password`, or export ASA_USERNAME / ASA_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Device ───────────────────────────────────────────────────────
    #[error("Device rejected the request (HTTP {status}): {message}")]
    #[diagnostic(
        code(asa::command_failed),
        help("The REST API agent may be disabled; try --api legacy on older software.")
    )]
    CommandFailed { status: u16, message: String },

    #[error("Unexpected device output in {context}: {message}")]
    #[diagnostic(code(asa::parse))]
    Parse { context: String, message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(asa::validation))]
    Validation { field: String, reason: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(asa::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: asactl profiles add"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No device given and no profile configured")]
    #[diagnostic(
        code(asa::no_config),
        help(
            "Pass --host, or create a profile with: asactl profiles add\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(asa::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::CommandFailed { .. } | Self::Parse { .. } => exit_code::DEVICE,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NoConfig { .. } => {
                exit_code::USAGE
            }
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Yaml(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed { host, status } => CliError::AuthFailed {
                host,
                reason: format!("login rejected with HTTP {status}"),
            },
            CoreError::Timeout { host } => CliError::Timeout { host },
            CoreError::Connection { host, reason } => CliError::ConnectionFailed { host, reason },
            CoreError::Command { status, message } => CliError::CommandFailed { status, message },
            CoreError::Parse { context, message } => CliError::Parse { context, message },
            CoreError::Config { message } => CliError::Validation {
                field: "device".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: String::from("(see `asactl profiles list`)"),
            },
            other => CliError::Config(other),
        }
    }
}
