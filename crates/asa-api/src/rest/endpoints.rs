// REST endpoint wrappers
//
// Typed calls for the handful of endpoints the driver needs.

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rest::client::{RestClient, decode_items};
use crate::rest::types::{
    ArpItem, CliResponse, DeviceVersion, InterfaceItem, SerialNumber,
};

impl RestClient {
    // ── CLI ──────────────────────────────────────────────────────────

    /// Run CLI commands through `POST /cli`.
    ///
    /// Returns `(command, output)` pairs in submission order. The device
    /// answers positionally, so a response of a different length is
    /// treated as malformed.
    pub async fn execute_commands(
        &self,
        commands: &[String],
    ) -> Result<Vec<(String, String)>, Error> {
        let payload = json!({ "commands": commands });
        let body = self.fetch("/cli", Some(&payload)).await?;
        let resp: CliResponse = Self::decode(body)?;

        if resp.response.len() != commands.len() {
            return Err(Error::Deserialization {
                message: format!(
                    "expected {} CLI outputs, got {}",
                    commands.len(),
                    resp.response.len()
                ),
                body: resp.response.join("\n"),
            });
        }

        Ok(commands.iter().cloned().zip(resp.response).collect())
    }

    // ── Monitoring ───────────────────────────────────────────────────

    pub async fn serial_number(&self) -> Result<SerialNumber, Error> {
        Self::decode(self.fetch("/monitoring/serialnumber", None).await?)
    }

    pub async fn device_version(&self) -> Result<DeviceVersion, Error> {
        Self::decode(
            self.fetch("/monitoring/device/components/version", None)
                .await?,
        )
    }

    pub async fn arp_table(&self) -> Result<Vec<ArpItem>, Error> {
        self.list("/monitoring/arp").await
    }

    // ── Interfaces ───────────────────────────────────────────────────

    /// List every item of one interface endpoint, e.g. `/interfaces/physical`.
    pub async fn list_interfaces(&self, endpoint: &str) -> Result<Vec<InterfaceItem>, Error> {
        self.list(endpoint).await
    }

    /// Like [`list_interfaces`](Self::list_interfaces), but an endpoint the
    /// device does not serve yields `Ok(None)`.
    ///
    /// Older software only exposes `/interfaces/physical`.
    pub async fn try_list_interfaces(
        &self,
        endpoint: &str,
    ) -> Result<Option<Vec<InterfaceItem>>, Error> {
        match self.try_fetch_paginated(endpoint, None).await? {
            Some(body) => decode_items(body).map(Some),
            None => {
                debug!(endpoint, "interface endpoint not available on this device");
                Ok(None)
            }
        }
    }
}
