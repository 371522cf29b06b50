// REST API response types
//
// Only the fields the driver reads are modelled. Optional fields use
// `#[serde(default)]` because interface classes differ in what they report;
// fields the driver cannot work without stay required so a missing key
// fails decoding.

use serde::Deserialize;

// ── Pagination envelope ──────────────────────────────────────────────

/// `rangeInfo` block attached to every listing response:
/// `{ "rangeInfo": {...}, "items": [...] }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeInfo {
    #[serde(default)]
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

// ── CLI ──────────────────────────────────────────────────────────────

/// Outputs positionally aligned with the submitted commands.
#[derive(Debug, Deserialize)]
pub struct CliResponse {
    pub response: Vec<String>,
}

// ── Monitoring ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialNumber {
    pub serial_number: String,
}

/// `GET /monitoring/device/components/version`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceVersion {
    #[serde(rename = "asaVersion")]
    pub asa_version: String,
    #[serde(rename = "upTimeinSeconds")]
    pub uptime_secs: u64,
    #[serde(rename = "deviceType")]
    pub device_type: String,
}

/// One entry of `GET /monitoring/arp`. The device does not report an age.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArpItem {
    pub interface: String,
    pub ip_address: String,
    pub mac_address: String,
}

// ── Interfaces ───────────────────────────────────────────────────────

/// `{ "kind": "...", "value": "..." }` wrapper used for addresses and masks.
#[derive(Debug, Clone, Deserialize)]
pub struct Valued {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticIp {
    pub ip: Valued,
    pub net_mask: Valued,
}

/// `ipAddress` is an object for static addressing and the bare string
/// `"NoneSelected"` when unset. DHCP/PPPoE objects land in `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IpAddressField {
    Static(StaticIp),
    Unset(String),
    Other(serde_json::Value),
}

impl Default for IpAddressField {
    fn default() -> Self {
        Self::Unset(NONE_SELECTED.into())
    }
}

/// Sentinel the device reports for an interface without an IPv4 address.
pub const NONE_SELECTED: &str = "NoneSelected";

impl IpAddressField {
    /// The static address and mask, if one is configured.
    pub fn as_static(&self) -> Option<&StaticIp> {
        match self {
            Self::Static(ip) => Some(ip),
            Self::Unset(_) | Self::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Address {
    pub address: Valued,
    pub prefix_length: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Info {
    #[serde(default)]
    pub ipv6_addresses: Vec<Ipv6Address>,
}

/// One item of `/interfaces/physical` and its sibling listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceItem {
    #[serde(rename = "hardwareID")]
    pub hardware_id: String,
    pub shutdown: bool,
    #[serde(default)]
    pub interface_desc: String,
    #[serde(default)]
    pub ip_address: IpAddressField,
    #[serde(default)]
    pub ipv6_info: Ipv6Info,
}
