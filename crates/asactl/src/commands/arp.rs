//! `arp` handler.

use tabled::Tabled;

use asa_core::{ArpEntry, AsaDriver, NetworkDriver};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ArpRow {
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Age")]
    age: String,
}

impl From<&ArpEntry> for ArpRow {
    fn from(e: &ArpEntry) -> Self {
        Self {
            interface: e.interface.clone(),
            ip: e.ip.to_string(),
            mac: e.mac.clone(),
            age: format!("{:.0}", e.age),
        }
    }
}

pub async fn handle(driver: &AsaDriver, vrf: &str, format: OutputFormat) -> Result<(), CliError> {
    let entries = driver.get_arp_table(vrf).await?;
    let out = output::render_list(format, &entries[..], |list: &[ArpEntry]| {
        list.iter().map(ArpRow::from).collect()
    })?;
    output::print_output(&out);
    Ok(())
}
