// ── REST-to-domain conversions ──
//
// Maps `asa_api::rest_types` payloads onto the normalized model. Fields the
// device serializes as strings (addresses, masks, MACs) are parsed into
// strong types here so a malformed payload fails at the boundary.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use asa_api::rest_types::{ArpItem, DeviceVersion, InterfaceItem};

use crate::error::CoreError;
use crate::model::{AddressInfo, ArpEntry, Interface, InterfaceAddresses};
use crate::parse::{format_mac, prefix_from_mask};

// ── Helpers ────────────────────────────────────────────────────────

fn parse_addr<T: FromStr>(raw: &str, context: &str, what: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::parse(context, format!("invalid {what} '{raw}'")))
}

// ── Interfaces ─────────────────────────────────────────────────────

/// Static attributes from the bulk listing. Runtime state is filled in
/// later from `show interface`.
impl From<&InterfaceItem> for Interface {
    fn from(item: &InterfaceItem) -> Self {
        Self {
            is_enabled: !item.shutdown,
            description: item.interface_desc.clone(),
            ..Self::default()
        }
    }
}

/// IPv4 (unless unset) and every IPv6 address of one listing item.
pub(crate) fn interface_addresses(item: &InterfaceItem) -> Result<InterfaceAddresses, CoreError> {
    let context = format!("interface {}", item.hardware_id);
    let mut addrs = InterfaceAddresses::default();

    if let Some(ip) = item.ip_address.as_static() {
        let addr: Ipv4Addr = parse_addr(&ip.ip.value, &context, "IPv4 address")?;
        let mask: Ipv4Addr = parse_addr(&ip.net_mask.value, &context, "netmask")?;
        let prefix_length = prefix_from_mask(mask)
            .ok_or_else(|| CoreError::parse(&context, format!("non-contiguous netmask {mask}")))?;
        addrs.ipv4.insert(addr, AddressInfo { prefix_length });
    }

    for v6 in &item.ipv6_info.ipv6_addresses {
        let addr: Ipv6Addr = parse_addr(&v6.address.value, &context, "IPv6 address")?;
        addrs.ipv6.insert(
            addr,
            AddressInfo {
                prefix_length: v6.prefix_length,
            },
        );
    }

    Ok(addrs)
}

// ── ARP ────────────────────────────────────────────────────────────

/// The REST API does not report entry age.
impl TryFrom<ArpItem> for ArpEntry {
    type Error = CoreError;

    fn try_from(item: ArpItem) -> Result<Self, Self::Error> {
        let mac = format_mac(&item.mac_address).ok_or_else(|| {
            CoreError::parse("ARP entry", format!("invalid MAC address '{}'", item.mac_address))
        })?;
        let ip: IpAddr = parse_addr(&item.ip_address, "ARP entry", "IP address")?;

        Ok(Self {
            interface: item.interface,
            mac,
            ip,
            age: 0.0,
        })
    }
}

// ── Facts ──────────────────────────────────────────────────────────

pub(crate) fn uptime_secs(version: &DeviceVersion) -> f64 {
    f64::from(u32::try_from(version.uptime_secs).unwrap_or(u32::MAX))
}
