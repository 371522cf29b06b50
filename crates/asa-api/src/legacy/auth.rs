// Legacy exec API authentication
//
// There is no login endpoint. Credentials are checked by running
// `show version` with Basic auth; HTTP 200 means they were accepted.

use tracing::debug;

use crate::auth::AuthOutcome;
use crate::error::Error;
use crate::legacy::client::LegacyClient;

const PROBE_COMMAND: &str = "show version";

impl LegacyClient {
    /// Verify the credentials against the version endpoint.
    pub async fn authenticate(&self) -> Result<AuthOutcome, Error> {
        debug!("probing legacy exec API");
        match self.fetch(PROBE_COMMAND, None).await {
            Ok(_) => Ok(AuthOutcome::Granted),
            Err(Error::Command { status, .. }) => {
                debug!(status, "legacy probe rejected");
                Ok(AuthOutcome::Rejected { status })
            }
            Err(e) => Err(e),
        }
    }

    /// Liveness check. Re-probes on every call; nothing is cached.
    pub async fn probe(&self) -> Result<AuthOutcome, Error> {
        self.authenticate().await
    }

    /// No server-side session exists, so there is nothing to revoke.
    pub fn revoke(&self) -> AuthOutcome {
        debug!("legacy API has no session to revoke");
        AuthOutcome::Granted
    }
}

