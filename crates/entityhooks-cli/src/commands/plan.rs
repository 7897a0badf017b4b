//! Capability plan: what attaching each hooked type would do.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use entityhooks_core::error::HookError;
use entityhooks_registry::{HookRegistry, LoadObserver, ModelType};

/// One hooked type in table/JSON output
#[derive(Debug, Serialize, Tabled)]
pub struct PlanRow {
    /// Host type name
    #[tabled(rename = "Type")]
    pub type_name: String,
    /// Events with hooks
    #[tabled(rename = "Events")]
    pub events: String,
    /// Number of hooks across all events
    #[tabled(rename = "Hooks")]
    pub hooks: usize,
    /// Capabilities that would be attached
    #[tabled(rename = "Capabilities")]
    pub capabilities: String,
}

/// Resolve every hooked type against an in-memory handle and report what was attached.
pub fn execute(registry: Arc<HookRegistry>, format: OutputFormat) -> Result<(), HookError> {
    let observer = LoadObserver::new(Arc::clone(&registry));
    let mut rows = Vec::new();

    for (type_name, events) in registry.hooks()? {
        let handle = ModelType::new(type_name.as_str());
        let applied = observer.on_type_resolved(&handle)?;

        rows.push(PlanRow {
            type_name: type_name.clone(),
            events: events.keys().cloned().collect::<Vec<_>>().join(", "),
            hooks: events.values().map(Vec::len).sum(),
            capabilities: applied.to_string(),
        });
    }

    output::print_rows(&rows, format, "No hooked types.")
}
