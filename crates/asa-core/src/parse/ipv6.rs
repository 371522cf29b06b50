// `show nameif` and `show ipv6 interface` output.
//
// The IPv6 listing is keyed by logical name (`outside`), while the rest of
// the driver keys interfaces by hardware name; `show nameif` bridges the
// two.

use std::net::Ipv6Addr;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::CoreError;
use crate::model::AddressInfo;

use super::pattern;

/// Link-local addresses are always fe80::/64.
pub const LINK_LOCAL_PREFIX: u8 = 64;

const CONTEXT: &str = "show ipv6 interface";

/// Marker the device prints when the command is not available.
const INVALID_INPUT: &str = "Invalid input";

static LINK_LOCAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"link-local address is ([0-9a-fA-F:]+)"));
static GLOBAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^\s+([0-9a-fA-F:]+), subnet is [0-9a-fA-F:]+/(\d+)"));

/// One row of `show nameif`: hardware name and the logical name bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameifEntry {
    pub interface: String,
    pub nameif: String,
}

/// Parse the `show nameif` table. The header row and anything that does
/// not end in a numeric security level are skipped.
pub fn parse_nameif(output: &str) -> Vec<NameifEntry> {
    output
        .lines()
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [interface, nameif, level] = tokens.as_slice() else {
                return None;
            };
            level.parse::<u8>().ok()?;
            Some(NameifEntry {
                interface: (*interface).to_owned(),
                nameif: (*nameif).to_owned(),
            })
        })
        .collect()
}

/// IPv6 addresses per logical interface name.
pub type Ipv6ByNameif = IndexMap<String, IndexMap<Ipv6Addr, AddressInfo>>;

/// Parse `show ipv6 interface`. Returns an empty map when the device
/// rejected the command.
pub fn parse_ipv6_interfaces(output: &str) -> Result<Ipv6ByNameif, CoreError> {
    let mut result = Ipv6ByNameif::new();
    if output.contains(INVALID_INPUT) {
        return Ok(result);
    }

    let mut current: Option<String> = None;
    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !line.starts_with(char::is_whitespace) {
            current = line.split_whitespace().next().map(str::to_owned);
            continue;
        }
        let Some(nameif) = current.as_ref() else {
            continue;
        };

        let invalid =
            || CoreError::parse(CONTEXT, format!("invalid address line '{}'", line.trim()));
        let found = if let Some(c) = LINK_LOCAL.captures(line) {
            Some((c[1].to_owned(), LINK_LOCAL_PREFIX))
        } else if let Some(c) = GLOBAL.captures(line) {
            Some((c[1].to_owned(), c[2].parse().map_err(|_| invalid())?))
        } else {
            None
        };

        if let Some((addr, prefix_length)) = found {
            let addr: Ipv6Addr = addr.parse().map_err(|_| invalid())?;
            result
                .entry(nameif.clone())
                .or_default()
                .insert(addr, AddressInfo { prefix_length });
        }
    }

    Ok(result)
}
