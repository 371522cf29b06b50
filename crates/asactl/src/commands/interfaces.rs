//! `interfaces` and `interfaces-ip` handlers.

use indexmap::IndexMap;
use tabled::Tabled;

use asa_core::{AsaDriver, Interface, InterfaceAddresses, NetworkDriver};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Up")]
    up: &'static str,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "MTU")]
    mtu: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn or_dash(value: u64) -> String {
    if value == 0 {
        "-".into()
    } else {
        value.to_string()
    }
}

fn interface_rows(interfaces: &IndexMap<String, Interface>) -> Vec<InterfaceRow> {
    interfaces
        .iter()
        .map(|(name, iface)| InterfaceRow {
            name: name.clone(),
            up: yes_no(iface.is_up),
            enabled: yes_no(iface.is_enabled),
            speed: if iface.speed == 0 {
                "-".into()
            } else {
                format!("{} Mbps", iface.speed)
            },
            mtu: or_dash(u64::from(iface.mtu)),
            mac: iface.mac_address.clone(),
            description: iface.description.clone(),
        })
        .collect()
}

#[derive(Tabled)]
struct AddressRow {
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Family")]
    family: &'static str,
    #[tabled(rename = "Address")]
    address: String,
}

fn address_rows(addrs: &IndexMap<String, InterfaceAddresses>) -> Vec<AddressRow> {
    let mut rows = Vec::new();
    for (name, entry) in addrs {
        for (ip, info) in &entry.ipv4 {
            rows.push(AddressRow {
                interface: name.clone(),
                family: "ipv4",
                address: format!("{ip}/{}", info.prefix_length),
            });
        }
        for (ip, info) in &entry.ipv6 {
            rows.push(AddressRow {
                interface: name.clone(),
                family: "ipv6",
                address: format!("{ip}/{}", info.prefix_length),
            });
        }
    }
    rows
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(driver: &AsaDriver, format: OutputFormat) -> Result<(), CliError> {
    let interfaces = driver.get_interfaces().await?;
    let out = output::render_list(format, &interfaces, interface_rows)?;
    output::print_output(&out);
    Ok(())
}

pub async fn handle_ip(driver: &AsaDriver, format: OutputFormat) -> Result<(), CliError> {
    let addrs = driver.get_interfaces_ip().await?;
    let out = output::render_list(format, &addrs, address_rows)?;
    output::print_output(&out);
    Ok(())
}
