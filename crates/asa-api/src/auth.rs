use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Response and request header carrying the REST session token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Which management API generation the device exposes.
///
/// Determines the URL prefix and the authentication flow:
/// - `Rest`: JSON API under `/api`, token exchange via `/tokenservices`.
/// - `Legacy`: CLI text over `/admin/exec/`, HTTP Basic auth on every request.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApiGeneration {
    #[default]
    Rest,
    Legacy,
}

impl ApiGeneration {
    /// Path prefix that every endpoint of this generation lives under.
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Rest => "/api/",
            Self::Legacy => "/admin/exec/",
        }
    }
}

/// Username and password for the device.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Result of an authentication, revocation, or liveness probe.
///
/// A rejection is a normal outcome, not an error: the caller decides
/// whether it is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Rejected { status: u16 },
}

impl AuthOutcome {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// HTTP status of a rejection.
    pub fn status(self) -> Option<u16> {
        match self {
            Self::Granted => None,
            Self::Rejected { status } => Some(status),
        }
    }
}
