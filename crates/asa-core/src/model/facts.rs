// ── Device identity ──

use serde::{Deserialize, Serialize};

pub const VENDOR: &str = "Cisco Systems";

/// Standard identity bundle returned by `get_facts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facts {
    /// Seconds since boot.
    pub uptime: f64,
    pub vendor: String,
    pub os_version: String,
    pub serial_number: String,
    pub model: String,
    pub hostname: String,
    pub fqdn: String,
    pub interface_list: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liveness {
    pub is_alive: bool,
}
