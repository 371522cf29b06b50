//! `alive` handler.

use owo_colors::OwoColorize;

use asa_core::{AsaDriver, Liveness, NetworkDriver};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

fn status_line(liveness: &Liveness) -> String {
    let color = output::should_color();
    match (liveness.is_alive, color) {
        (true, true) => "alive".green().to_string(),
        (false, true) => "not alive".red().to_string(),
        (true, false) => "alive".into(),
        (false, false) => "not alive".into(),
    }
}

pub async fn handle(driver: &AsaDriver, format: OutputFormat) -> Result<(), CliError> {
    let liveness = driver.is_alive().await?;
    let out = output::render_single(format, &liveness, status_line)?;
    output::print_output(&out);
    Ok(())
}
