//! Hook discovery configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filename suffixes that are never hooks, whatever the configuration says.
pub const BACKUP_SUFFIXES: [&str; 2] = ["~", ".bak"];

/// Where hook scripts live and which files are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Root of the `<root>/<type>/<event>/<script>` tree.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Whether symlinked directories are followed while scanning.
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Extra filename suffixes to ignore on top of [`BACKUP_SUFFIXES`].
    #[serde(default)]
    pub backup_suffixes: Vec<String>,
}

impl HooksConfig {
    /// Configuration rooted at an explicit hooks directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Returns whether `file_name` is an editor or backup artifact.
    pub fn is_backup(&self, file_name: &str) -> bool {
        BACKUP_SUFFIXES
            .iter()
            .copied()
            .chain(self.backup_suffixes.iter().map(String::as_str))
            .any(|suffix| file_name.ends_with(suffix))
    }

    /// Configuration for the conventional `config/hooks` directory of an application.
    pub fn under(app_root: &Path) -> Self {
        Self::with_root(app_root.join(default_root()))
    }
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            follow_symlinks: false,
            backup_suffixes: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("config").join("hooks")
}
