// Legacy exec API HTTP client
//
// Wraps `reqwest::Client` with `/admin/exec/` URL construction and Basic
// auth. Every command maps to one request and the body is the CLI output
// as plain text.

use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tracing::debug;
use url::Url;

use crate::auth::{ApiGeneration, Credentials};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the legacy `/admin/exec/` API.
///
/// There is no session: credentials travel with every request.
pub struct LegacyClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl LegacyClient {
    /// Create a new legacy client from a `TransportConfig`.
    ///
    /// `base_url` is the device root (e.g. `https://10.0.0.1:443`).
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, base_url, credentials)
    }

    /// Create a legacy client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        credentials: Credentials,
    ) -> Result<Self, Error> {
        let mut url = Url::parse(base_url)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}{}", ApiGeneration::Legacy.base_path()));
        Ok(Self {
            http,
            base_url: url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `show interface GigabitEthernet0/0` becomes
    /// `{base}/admin/exec/show+interface+GigabitEthernet0%2F0`.
    ///
    /// The exec handler treats each `/`-separated path segment as its own
    /// command (`show+version/show+clock` runs both), so a `/` inside a
    /// command is percent-encoded to stay in a single segment.
    pub(crate) fn command_url(&self, command: &str) -> Result<Url, Error> {
        let segment = command.split_whitespace().collect::<Vec<_>>().join("+");
        if segment.is_empty() {
            return Err(Error::InvalidEndpoint("empty command".into()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&segment);
        Ok(url)
    }

    // ── Requests ─────────────────────────────────────────────────────

    async fn send(&self, command: &str, payload: Option<&str>) -> Result<reqwest::Response, Error> {
        let url = self.command_url(command)?;
        let builder = match payload {
            Some(body) => {
                debug!("POST {url}");
                self.http.post(url).body(body.to_owned())
            }
            None => {
                debug!("GET {url}");
                self.http.get(url)
            }
        };

        Ok(builder
            .basic_auth(
                &self.credentials.username,
                Some(self.credentials.password.expose_secret()),
            )
            .send()
            .await?)
    }

    /// Run `command` and return its text output.
    ///
    /// Any status other than 200 is an [`Error::Command`].
    pub async fn fetch(&self, command: &str, payload: Option<&str>) -> Result<String, Error> {
        let resp = self.send(command, payload).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            debug!(%status, command, "device returned non-success status");
            return Err(Error::Command {
                status: status.as_u16(),
                endpoint: command.to_owned(),
            });
        }
        Ok(resp.text().await?)
    }

    /// Like [`fetch`](Self::fetch), but a non-200 status yields `Ok(None)`.
    pub async fn try_fetch(
        &self,
        command: &str,
        payload: Option<&str>,
    ) -> Result<Option<String>, Error> {
        match self.fetch(command, payload).await {
            Ok(text) => Ok(Some(text)),
            Err(Error::Command { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Run each command in order, one request per command.
    pub async fn execute_commands(
        &self,
        commands: &[String],
    ) -> Result<Vec<(String, String)>, Error> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            let output = self.fetch(command, None).await?;
            results.push((command.clone(), output));
        }
        Ok(results)
    }
}
