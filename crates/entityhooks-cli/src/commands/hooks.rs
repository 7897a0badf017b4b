//! Hook listing and lookup commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use entityhooks_core::error::HookError;
use entityhooks_registry::{HookPath, HookRegistry};

/// Arguments for `events`
#[derive(Debug, Args)]
pub struct EventsArgs {
    /// Restrict to one type (e.g. `Host`)
    pub type_name: Option<String>,
}

/// Arguments for `find`
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Type name (e.g. `Host`)
    pub type_name: String,
    /// Event name (e.g. `create`)
    pub event: String,
}

/// One hook in table/JSON output
#[derive(Debug, Serialize, Tabled)]
pub struct HookRow {
    /// Host type name
    #[tabled(rename = "Type")]
    pub type_name: String,
    /// Event name
    #[tabled(rename = "Event")]
    pub event: String,
    /// Script filename
    #[tabled(rename = "Script")]
    pub script: String,
    /// Full path
    #[tabled(rename = "Path")]
    pub path: String,
}

impl From<&HookPath> for HookRow {
    fn from(hook: &HookPath) -> Self {
        Self {
            type_name: hook.type_name().to_string(),
            event: hook.event().to_string(),
            script: hook.script_name().to_string(),
            path: hook.path().display().to_string(),
        }
    }
}

/// One event name in table/JSON output
#[derive(Debug, Serialize, Tabled)]
pub struct EventRow {
    /// Event name
    #[tabled(rename = "Event")]
    pub event: String,
}

/// `list`: every hook grouped by type and event
pub fn list(registry: &HookRegistry, format: OutputFormat) -> Result<(), HookError> {
    let rows: Vec<HookRow> = registry
        .hooks()?
        .values()
        .flat_map(|events| events.values())
        .flatten()
        .map(HookRow::from)
        .collect();

    output::print_rows(&rows, format, "No hooks found.")
}

/// `events`: distinct event names
pub fn events(
    args: &EventsArgs,
    registry: &HookRegistry,
    format: OutputFormat,
) -> Result<(), HookError> {
    let events = match &args.type_name {
        Some(type_name) => registry.events_for(type_name)?,
        None => registry.events()?,
    };

    let rows: Vec<EventRow> = events.into_iter().map(|event| EventRow { event }).collect();
    output::print_rows(&rows, format, "No events found.")
}

/// `find`: hooks for one `(type, event)` pair
pub fn find(args: &FindArgs, registry: &HookRegistry, format: OutputFormat) -> Result<(), HookError> {
    let rows: Vec<HookRow> = registry
        .find_hooks(&args.type_name, &args.event)?
        .unwrap_or_default()
        .iter()
        .map(HookRow::from)
        .collect();

    output::print_rows(
        &rows,
        format,
        &format!("No hooks for {}#{}.", args.type_name, args.event),
    )
}
