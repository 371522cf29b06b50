use thiserror::Error;

/// Top-level error type for the `asa-api` crate.
///
/// Covers every failure mode of both API generations: transport,
/// non-success device responses, and body decoding. `asa-core` maps
/// these into driver-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// DNS failure, refused connection, timeout, or any other socket-level problem.
    #[error("HTTP transport error: {0}")]
    Connection(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An endpoint or command could not be turned into a request path.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A credential or token could not be encoded as a header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Device ──────────────────────────────────────────────────────
    /// The device answered a well-formed request with a non-success status.
    #[error("Operation returned an error (HTTP {status}) for {endpoint}")]
    Command { status: u16, endpoint: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON decoding failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status carried by the error, if the device produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Command { status, .. } => Some(*status),
            Self::Connection(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Connection(e) if e.is_timeout())
    }

    /// Returns `true` for transport-level failures (never a device response).
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub(crate) fn deserialization(err: &serde_json::Error, body: &str) -> Self {
        let end = body.char_indices().nth(200).map_or(body.len(), |(i, _)| i);
        let preview = &body[..end];
        Self::Deserialization {
            message: format!("{err} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
    }
}
