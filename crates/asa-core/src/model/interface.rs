// ── Interface domain types ──

use std::net::{Ipv4Addr, Ipv6Addr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `last_flapped` value when the device does not report it.
pub const LAST_FLAPPED_UNKNOWN: f64 = -1.0;

/// Operational and administrative state of one interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    /// Line protocol is up.
    pub is_up: bool,
    /// Not administratively shut down.
    pub is_enabled: bool,
    pub description: String,
    pub last_flapped: f64,
    /// Mbit/s, `0` when unknown.
    pub speed: u64,
    /// `0` when unknown.
    pub mtu: u32,
    /// Colon form, empty when unknown.
    pub mac_address: String,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            is_up: false,
            is_enabled: false,
            description: String::new(),
            last_flapped: LAST_FLAPPED_UNKNOWN,
            speed: 0,
            mtu: 0,
            mac_address: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub prefix_length: u8,
}

/// Addresses bound to one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddresses {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub ipv4: IndexMap<Ipv4Addr, AddressInfo>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub ipv6: IndexMap<Ipv6Addr, AddressInfo>,
}

impl InterfaceAddresses {
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}
