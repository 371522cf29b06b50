// ── Runtime driver configuration ──
//
// These types describe how to reach one device. They carry credentials and
// connection tuning but never touch disk; `asa-config` or the caller builds
// them and hands them to `AsaDriver`.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use asa_api::{ApiGeneration, Credentials, TlsMode, TransportConfig};

use crate::error::CoreError;

pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Interface listings queried by `get_interfaces` on the REST API.
///
/// Only `physical` is guaranteed to exist; the others are skipped when the
/// device does not serve them.
pub const SUPPORTED_INTERFACE_ENDPOINTS: &[&str] = &[
    "/interfaces/physical",
    "/interfaces/vlan",
    "/interfaces/etherchannels",
    "/interfaces/redundant",
];

/// Optional construction parameters.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub port: u16,
    pub api: ApiGeneration,
    pub tls: TlsMode,
    /// Overrides [`SUPPORTED_INTERFACE_ENDPOINTS`].
    pub interface_endpoints: Option<Vec<String>>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api: ApiGeneration::default(),
            tls: TlsMode::default(),
            interface_endpoints: None,
        }
    }
}

/// Everything needed to connect to a single device.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Device root URL (e.g. `https://10.0.0.1:443`).
    pub url: Url,
    pub credentials: Credentials,
    pub api: ApiGeneration,
    pub tls: TlsMode,
    /// Applied to every HTTP call.
    pub timeout: Duration,
    pub interface_endpoints: Vec<String>,
}

impl DriverConfig {
    /// Build a config from the classic driver arguments.
    ///
    /// `hostname` is normally a bare host or address and becomes
    /// `https://{hostname}:{port}`. A value that already carries a scheme is
    /// used as-is, taking `port` only when it has none.
    pub fn new(
        hostname: &str,
        username: &str,
        password: SecretString,
        timeout: Duration,
        options: DriverOptions,
    ) -> Result<Self, CoreError> {
        let url = device_url(hostname, options.port)?;
        let interface_endpoints = options.interface_endpoints.unwrap_or_else(|| {
            SUPPORTED_INTERFACE_ENDPOINTS
                .iter()
                .map(|e| (*e).to_owned())
                .collect()
        });

        Ok(Self {
            url,
            credentials: Credentials::new(username, password),
            api: options.api,
            tls: options.tls,
            timeout,
            interface_endpoints,
        })
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig::new(self.tls.clone(), self.timeout)
    }

    /// Host part of the URL, for error messages.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("<unknown>")
    }
}

fn device_url(hostname: &str, port: u16) -> Result<Url, CoreError> {
    let invalid = |reason: String| CoreError::Config {
        message: format!("invalid hostname '{hostname}': {reason}"),
    };

    if hostname.contains("://") {
        let mut url = Url::parse(hostname).map_err(|e| invalid(e.to_string()))?;
        if url.port().is_none() && url.set_port(Some(port)).is_err() {
            return Err(invalid("cannot carry a port".into()));
        }
        return Ok(url);
    }

    let host = if hostname.contains(':') && !hostname.starts_with('[') {
        // Bare IPv6 literal.
        format!("[{hostname}]")
    } else {
        hostname.to_owned()
    };
    Url::parse(&format!("https://{host}:{port}")).map_err(|e| invalid(e.to_string()))
}
