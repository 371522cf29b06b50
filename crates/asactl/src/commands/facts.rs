//! `facts` handler.

use asa_core::{AsaDriver, Facts, NetworkDriver};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{self, FieldRow};

fn format_uptime(secs: f64) -> String {
    // Whole seconds are enough for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::as_conversions)]
    let total = secs.max(0.0) as u64;
    let (days, rem) = (total / 86_400, total % 86_400);
    format!("{days}d {:02}h {:02}m {:02}s", rem / 3_600, rem % 3_600 / 60, rem % 60)
}

fn detail(facts: &Facts) -> String {
    output::detail_table(&[
        FieldRow { field: "Hostname", value: facts.hostname.clone() },
        FieldRow { field: "FQDN", value: facts.fqdn.clone() },
        FieldRow { field: "Vendor", value: facts.vendor.clone() },
        FieldRow { field: "Model", value: facts.model.clone() },
        FieldRow { field: "OS version", value: facts.os_version.clone() },
        FieldRow { field: "Serial", value: facts.serial_number.clone() },
        FieldRow { field: "Uptime", value: format_uptime(facts.uptime) },
        FieldRow { field: "Interfaces", value: facts.interface_list.join(", ") },
    ])
}

pub async fn handle(driver: &AsaDriver, format: OutputFormat) -> Result<(), CliError> {
    let facts = driver.get_facts().await?;
    let out = output::render_single(format, &facts, detail)?;
    output::print_output(&out);
    Ok(())
}
