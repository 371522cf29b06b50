// ── CLI text parsers ──
//
// The legacy exec API only returns human-readable CLI output, and the REST
// API needs `show interface` text for per-port state. These parsers turn
// that text into model records with line-oriented regex matching.

pub mod arp;
pub mod interface;
pub mod ipv6;
pub mod version;

use std::net::Ipv4Addr;

use regex::Regex;

/// Compile a built-in pattern.
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("failed compiling pattern, this is a bug")
}

/// Convert a MAC in any common notation (`5c5e.abda.3cf0`,
/// `5c-5e-ab-da-3c-f0`, `5c:5e:ab:da:3c:f0`) to `5C:5E:AB:DA:3C:F0`.
pub fn format_mac(raw: &str) -> Option<String> {
    let hex: Vec<char> = raw
        .chars()
        .filter(|c| !matches!(c, '.' | ':' | '-'))
        .collect();
    if hex.len() != 12 || !hex.iter().all(char::is_ascii_hexdigit) {
        return None;
    }

    let pairs: Vec<String> = hex
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().to_ascii_uppercase())
        .collect();
    Some(pairs.join(":"))
}

/// Prefix length of a contiguous netmask. `None` for masks like `255.0.255.0`.
pub fn prefix_from_mask(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    let expected = u32::MAX.checked_shl(32 - ones).unwrap_or(0);
    if bits == expected {
        u8::try_from(ones).ok()
    } else {
        None
    }
}

/// Convert a bandwidth figure to Mbit/s.
pub(crate) fn speed_mbps(value: u64, unit: &str) -> u64 {
    match unit.to_ascii_lowercase().as_str() {
        "kbps" | "kbit" => value / 1000,
        "gbps" | "gbit" => value * 1000,
        _ => value,
    }
}
