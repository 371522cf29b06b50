//! `cli` handler: raw command execution.

use std::fmt::Write;

use owo_colors::OwoColorize;

use asa_core::{AsaDriver, NetworkDriver};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

fn text_view<'a>(results: impl Iterator<Item = (&'a String, &'a String)>, color: bool) -> String {
    let mut out = String::new();
    for (command, text) in results {
        let banner = format!("── {command} ──");
        if color {
            let _ = writeln!(out, "{}", banner.bold());
        } else {
            let _ = writeln!(out, "{banner}");
        }
        let _ = writeln!(out, "{}", text.trim_end());
    }
    out.trim_end().to_owned()
}

pub async fn handle(
    driver: &AsaDriver,
    commands: &[String],
    pairs: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let color = output::should_color();
    let out = if pairs {
        let results = driver.cli_pairs(commands).await?;
        output::render_single(format, &results, |r| {
            text_view(r.iter().map(|(c, t)| (c, t)), color)
        })?
    } else {
        let results = driver.cli(commands).await?;
        output::render_single(format, &results, |r| text_view(r.iter(), color))?
    };
    output::print_output(&out);
    Ok(())
}
