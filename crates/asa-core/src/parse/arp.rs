// `show arp` output:
//
//     outside 10.0.0.254 0050.5689.00fe 12
//     inside 192.168.1.1 0050.5689.0002 -

use std::net::IpAddr;

use crate::error::CoreError;
use crate::model::ArpEntry;

use super::format_mac;

const CONTEXT: &str = "show arp";

/// Age in seconds. `-` (static) and `alias` (own address) map to `0.0`.
pub fn parse_age(token: &str) -> Result<f64, CoreError> {
    match token {
        "-" | "alias" => Ok(0.0),
        other => other
            .parse()
            .map_err(|_| CoreError::parse(CONTEXT, format!("invalid age '{other}'"))),
    }
}

/// Parse the full table. Lines that are not `interface ip mac age` rows
/// are ignored.
pub fn parse_arp_table(output: &str) -> Result<Vec<ArpEntry>, CoreError> {
    let mut entries = Vec::new();

    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [interface, ip, mac, age] = tokens.as_slice() else {
            continue;
        };
        let Ok(ip) = ip.parse::<IpAddr>() else {
            continue;
        };

        let mac = format_mac(mac)
            .ok_or_else(|| CoreError::parse(CONTEXT, format!("invalid MAC address '{mac}'")))?;

        entries.push(ArpEntry {
            interface: (*interface).to_owned(),
            mac,
            ip,
            age: parse_age(age)?,
        });
    }

    Ok(entries)
}
