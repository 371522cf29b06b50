// ── Core error types ──
//
// Driver-facing errors. The `From<asa_api::Error>` impl translates
// transport-layer errors into the kinds callers act on: connection
// failures (timeouts and rejected logins among them), device command
// failures, and output that could not be parsed.

use thiserror::Error;

/// Unified error type for the driver crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    /// Transport failure or failed token revocation.
    #[error("Cannot connect to {host}: {reason}")]
    Connection { host: String, reason: String },

    #[error("Authentication rejected by {host} (HTTP {status})")]
    AuthenticationFailed { host: String, status: u16 },

    /// No answer within the configured timeout.
    #[error("Request to {host} timed out")]
    Timeout { host: String },

    // ── Device errors ────────────────────────────────────────────────
    /// The device rejected a well-formed request.
    #[error("Operation returned an error (HTTP {status}): {message}")]
    Command { status: u16, message: String },

    // ── Data errors ──────────────────────────────────────────────────
    /// Device output did not have the shape the parser expects.
    #[error("Failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Command { status, .. } | Self::AuthenticationFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Connection-class failures: the device was not reached or refused
    /// the session.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::AuthenticationFailed { .. } | Self::Timeout { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<asa_api::Error> for CoreError {
    fn from(err: asa_api::Error) -> Self {
        match err {
            asa_api::Error::Connection(ref e) => {
                let host = e
                    .url()
                    .and_then(|u| u.host_str().map(String::from))
                    .unwrap_or_else(|| "<unknown>".into());
                if e.is_timeout() {
                    CoreError::Timeout { host }
                } else {
                    CoreError::Connection {
                        host,
                        reason: e.to_string(),
                    }
                }
            }
            asa_api::Error::Command { status, endpoint } => CoreError::Command {
                status,
                message: format!("request to {endpoint} failed"),
            },
            asa_api::Error::Deserialization { message, .. } => CoreError::Parse {
                context: "device response".into(),
                message,
            },
            asa_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid URL: {e}"),
            },
            asa_api::Error::InvalidHeader(message) => CoreError::Parse {
                context: "response header".into(),
                message,
            },
            asa_api::Error::InvalidEndpoint(message) | asa_api::Error::Tls(message) => {
                CoreError::Config { message }
            }
        }
    }
}
