// REST API authentication
//
// Token exchange through `/tokenservices`: a Basic-authenticated POST
// issues a token in the `X-Auth-Token` response header, which is then
// sent on every request until it is deleted again.

use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::auth::{AUTH_TOKEN_HEADER, AuthOutcome};
use crate::error::Error;
use crate::rest::client::RestClient;

const TOKEN_ENDPOINT: &str = "/tokenservices";
const PROBE_ENDPOINT: &str = "/monitoring/serialnumber";
const PROBE_MARKER: &str = "serialNumber";

impl RestClient {
    /// Exchange the configured credentials for a session token.
    ///
    /// HTTP 204 with an `X-Auth-Token` header stores the token and returns
    /// [`AuthOutcome::Granted`]. Any other status is returned as a rejection.
    /// A token that is not visible ASCII is an [`Error::InvalidHeader`].
    pub async fn authenticate(&mut self) -> Result<AuthOutcome, Error> {
        let url = self.url(TOKEN_ENDPOINT)?;
        debug!("requesting auth token at {url}");

        let credentials = self.credentials();
        let resp = self
            .http()
            .post(url)
            .basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            )
            .body("")
            .send()
            .await?;

        let status = resp.status();
        let token = match resp.headers().get(AUTH_TOKEN_HEADER) {
            Some(value) if status == StatusCode::NO_CONTENT => Some(
                value
                    .to_str()
                    .map_err(|e| Error::InvalidHeader(format!("{AUTH_TOKEN_HEADER}: {e}")))?
                    .to_owned(),
            ),
            _ => None,
        };

        match token {
            Some(token) => {
                self.set_token(Some(token));
                debug!("auth token issued");
                Ok(AuthOutcome::Granted)
            }
            _ => {
                debug!(%status, "auth token request rejected");
                Ok(AuthOutcome::Rejected {
                    status: status.as_u16(),
                })
            }
        }
    }

    /// Delete the current token on the device.
    ///
    /// The local token is dropped whatever the device answers. A non-204
    /// status is reported as a rejection rather than an error. Without a
    /// token there is nothing to revoke.
    pub async fn revoke(&mut self) -> Result<AuthOutcome, Error> {
        let Some(token) = self.token().map(String::from) else {
            return Ok(AuthOutcome::Granted);
        };
        let url = self.url(&format!("{TOKEN_ENDPOINT}/{token}"))?;
        debug!("revoking auth token");

        let result = self
            .http()
            .delete(url)
            .header(AUTH_TOKEN_HEADER, &token)
            .send()
            .await;
        self.set_token(None);

        let status = result?.status();
        if status == StatusCode::NO_CONTENT {
            debug!("auth token revoked");
            Ok(AuthOutcome::Granted)
        } else {
            debug!(%status, "token revocation rejected");
            Ok(AuthOutcome::Rejected {
                status: status.as_u16(),
            })
        }
    }

    /// `true` only while a token is held and the device still honours it.
    pub async fn has_active_session(&self) -> Result<bool, Error> {
        if self.token().is_none() {
            return Ok(false);
        }

        let alive = self
            .try_fetch(PROBE_ENDPOINT, None)
            .await?
            .is_some_and(|body| body.get(PROBE_MARKER).is_some());
        Ok(alive)
    }
}
