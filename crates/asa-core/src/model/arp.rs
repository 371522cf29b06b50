use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// One ARP cache entry. `mac` is always `AA:BB:CC:DD:EE:FF`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArpEntry {
    pub interface: String,
    pub mac: String,
    pub ip: IpAddr,
    /// Seconds; `0.0` for static and alias entries.
    pub age: f64,
}
