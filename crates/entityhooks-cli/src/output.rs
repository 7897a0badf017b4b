//! Table and JSON rendering for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use entityhooks_core::result::HookResult;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows as a table, or as a JSON array.
///
/// `empty` is printed instead of an empty table.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat, empty: &str) -> HookResult<()> {
    match format {
        OutputFormat::Json => print_json(rows),
        OutputFormat::Table if rows.is_empty() => {
            println!("{empty}");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", Table::new(rows));
            Ok(())
        }
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> HookResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an indented `key: value` line under a section heading.
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
