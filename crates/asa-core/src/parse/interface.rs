// `show interface` output.
//
// One block per interface:
//
//     Interface GigabitEthernet0/0 "outside", is up, line protocol is up
//       Hardware is i82540EM rev03, BW 1000 Mbps, DLY 10 usec
//             Auto-Duplex(Full-duplex), Auto-Speed(1000 Mbps)
//             Description: Uplink
//             MAC address 0050.5689.0001, MTU 1500
//             IP address 10.0.0.1, subnet mask 255.255.255.0

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::model::Interface;

use super::{format_mac, pattern, prefix_from_mask, speed_mbps};

const CONTEXT: &str = "show interface";

static STATUS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"is (up|down|administratively down), line protocol is (\w+)")
});
static LINE_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| pattern(r"line protocol is (\w+)"));
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| pattern(r"Description: (.*)$"));
static BANDWIDTH: LazyLock<Regex> = LazyLock::new(|| pattern(r"BW (\d+) ([KMG]bps)"));
static AUTO_SPEED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Auto-Speed\((\d+) ([KMG]bps)\)"));
static MAC: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"MAC address ([0-9a-fA-F]{4}\.[0-9a-fA-F]{4}\.[0-9a-fA-F]{4})")
});
static MTU: LazyLock<Regex> = LazyLock::new(|| pattern(r"MTU (\d+)"));
static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"IP address (\d+\.\d+\.\d+\.\d+), subnet mask (\d+\.\d+\.\d+\.\d+)")
});
static NAMEIF: LazyLock<Regex> = LazyLock::new(|| pattern(r#"^Interface \S+ "([^"]*)""#));

// ── Per-interface detail (REST enrichment) ──────────────────────────

/// Runtime state pulled from a single `show interface <name>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceDetail {
    pub is_up: bool,
    pub mac_address: Option<String>,
    pub mtu: Option<u32>,
    pub speed: Option<u64>,
}

impl InterfaceDetail {
    /// Overlay onto a record built from the bulk listing.
    pub fn apply(self, iface: &mut Interface) {
        iface.is_up = self.is_up;
        if let Some(mac) = self.mac_address {
            iface.mac_address = mac;
        }
        if let Some(mtu) = self.mtu {
            iface.mtu = mtu;
        }
        if let Some(speed) = self.speed {
            iface.speed = speed;
        }
    }
}

/// Parse the output for one interface. The line protocol state is
/// required; everything else is optional.
pub fn parse_interface_detail(name: &str, output: &str) -> Result<InterfaceDetail, CoreError> {
    let protocol = LINE_PROTOCOL
        .captures(output)
        .and_then(|c| c.get(1))
        .ok_or_else(|| {
            CoreError::parse(
                format!("{CONTEXT} {name}"),
                "no 'line protocol is' status in output",
            )
        })?;

    Ok(InterfaceDetail {
        is_up: protocol.as_str() == "up",
        mac_address: MAC.captures(output).and_then(|c| format_mac(&c[1])),
        mtu: MTU.captures(output).and_then(|c| c[1].parse().ok()),
        speed: speed_of(output),
    })
}

/// `Auto-Speed(n unit)` wins over the configured `BW` figure.
fn speed_of(text: &str) -> Option<u64> {
    AUTO_SPEED
        .captures(text)
        .or_else(|| BANDWIDTH.captures(text))
        .and_then(|c| Some(speed_mbps(c[1].parse().ok()?, &c[2])))
}

// ── Bulk dump (legacy API) ──────────────────────────────────────────

/// One interface block from a full `show interface` dump.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceBlock {
    /// Hardware name (`GigabitEthernet0/0`).
    pub name: String,
    /// Logical name, empty when unset.
    pub nameif: String,
    pub interface: Interface,
    /// Address and prefix length.
    pub ipv4: Option<(Ipv4Addr, u8)>,
}

impl InterfaceBlock {
    fn new(header: &str) -> Option<Self> {
        let name = header.split_whitespace().nth(1)?;
        let nameif = NAMEIF
            .captures(header)
            .map(|c| c[1].to_owned())
            .unwrap_or_default();
        Some(Self {
            name: name.trim_end_matches(',').to_owned(),
            nameif,
            interface: Interface::default(),
            ipv4: None,
        })
    }

    fn scan(&mut self, line: &str) -> Result<(), CoreError> {
        let iface = &mut self.interface;

        if let Some(c) = STATUS.captures(line) {
            iface.is_enabled = &c[1] != "administratively down";
            iface.is_up = &c[2] == "up";
        }
        if let Some(c) = DESCRIPTION.captures(line) {
            iface.description = c[1].trim().to_owned();
        }
        if let Some(speed) = speed_of(line) {
            iface.speed = speed;
        }
        if let Some(mac) = MAC.captures(line).and_then(|c| format_mac(&c[1])) {
            iface.mac_address = mac;
        }
        if let Some(mtu) = MTU.captures(line).and_then(|c| c[1].parse().ok()) {
            iface.mtu = mtu;
        }
        if let Some(c) = IPV4.captures(line) {
            let invalid = |what: &str| {
                CoreError::parse(format!("{CONTEXT} {}", self.name), format!("invalid {what}"))
            };
            let addr: Ipv4Addr = c[1].parse().map_err(|_| invalid("IPv4 address"))?;
            let mask: Ipv4Addr = c[2].parse().map_err(|_| invalid("subnet mask"))?;
            let prefix = prefix_from_mask(mask).ok_or_else(|| invalid("subnet mask"))?;
            self.ipv4 = Some((addr, prefix));
        }
        Ok(())
    }
}

/// Split a full dump into interface blocks, in device order.
///
/// A line starting at column 0 opens a new block; every line of the block
/// (header included) is matched against each attribute pattern on its own.
pub fn parse_interfaces(output: &str) -> Result<Vec<InterfaceBlock>, CoreError> {
    let mut blocks: Vec<InterfaceBlock> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !line.starts_with(char::is_whitespace) {
            let Some(block) = InterfaceBlock::new(line) else {
                continue;
            };
            blocks.push(block);
        }
        if let Some(current) = blocks.last_mut() {
            current.scan(line)?;
        }
    }

    Ok(blocks)
}
