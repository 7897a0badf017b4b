//! A discovered hook script.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Absolute path to an executable hook, with the names derived from its location.
///
/// Ordering compares the raw path bytes, which is the execution order within
/// one `(type, event)` group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HookPath {
    /// Full path to the script.
    path: PathBuf,
    /// Host type name derived from the type directory.
    type_name: String,
    /// Event directory name, verbatim.
    event: String,
    /// Script filename.
    script_name: String,
}

impl HookPath {
    /// Creates a hook path record.
    pub fn new(
        path: impl Into<PathBuf>,
        type_name: impl Into<String>,
        event: impl Into<String>,
        script_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            type_name: type_name.into(),
            event: event.into(),
            script_name: script_name.into(),
        }
    }

    /// Returns the full script path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the host type name this hook belongs to.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the event name this hook runs on.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Returns the script filename.
    pub fn script_name(&self) -> &str {
        &self.script_name
    }
}

impl Ord for HookPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.as_os_str().cmp(other.path.as_os_str())
    }
}

impl PartialOrd for HookPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<Path> for HookPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for HookPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
