//! Output formatting: table, JSON, YAML.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Color ────────────────────────────────────────────────────────────

/// Color only when stdout is a terminal and `NO_COLOR` is unset.
pub fn should_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list: `to_row` builds table rows, serde handles the rest.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &T,
    to_rows: impl Fn(&T) -> Vec<R>,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
    R: Tabled,
{
    match format {
        OutputFormat::Table => Ok(render_table(&to_rows(data))),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Render a single item; table mode uses `detail_fn` for a custom view.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Field/value detail tables ────────────────────────────────────────

#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub fn detail_table(rows: &[FieldRow]) -> String {
    render_table(rows)
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Item {
        name: &'static str,
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "Name")]
        name: &'static str,
    }

    fn rows(items: &[Item]) -> Vec<ItemRow> {
        items.iter().map(|i| ItemRow { name: i.name }).collect()
    }

    #[test]
    fn table_has_headers() {
        let items = [Item { name: "inside" }];
        let out = render_list(OutputFormat::Table, &items[..], rows).unwrap();
        assert!(out.contains("Name"));
        assert!(out.contains("inside"));
    }

    #[test]
    fn compact_json_is_one_line() {
        let items = [Item { name: "a" }, Item { name: "b" }];
        let out = render_list(OutputFormat::JsonCompact, &items[..], rows).unwrap();
        assert_eq!(out, r#"[{"name":"a"},{"name":"b"}]"#);
    }

    #[test]
    fn yaml_single() {
        let out = render_single(OutputFormat::Yaml, &Item { name: "x" }, |_| String::new()).unwrap();
        assert_eq!(out.trim(), "name: x");
    }
}
