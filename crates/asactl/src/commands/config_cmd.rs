//! `config` handler: device configuration retrieval.

use std::fmt::Write;

use asa_core::{AsaDriver, ConfigRetrieve, ConfigSnapshot, NetworkDriver};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

/// Plain text view. Section banners only appear when both configs were
/// requested.
fn text_view(snapshot: &ConfigSnapshot, retrieve: ConfigRetrieve) -> String {
    match retrieve {
        ConfigRetrieve::Startup => snapshot.startup.clone(),
        ConfigRetrieve::Running => snapshot.running.clone(),
        ConfigRetrieve::Candidate => String::new(),
        ConfigRetrieve::All => {
            let mut out = String::new();
            let _ = writeln!(out, "! ── startup-config ──");
            let _ = writeln!(out, "{}", snapshot.startup.trim_end());
            let _ = writeln!(out, "! ── running-config ──");
            let _ = write!(out, "{}", snapshot.running.trim_end());
            out
        }
    }
}

pub async fn handle(
    driver: &AsaDriver,
    retrieve: ConfigRetrieve,
    full: bool,
    sanitized: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let snapshot = driver.get_config(retrieve, full, sanitized).await?;
    let out = output::render_single(format, &snapshot, |s| text_view(s, retrieve))?;
    output::print_output(&out);
    Ok(())
}
