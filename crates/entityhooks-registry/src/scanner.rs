//! Hooks directory walker.
//!
//! Every entry below the root is classified; only plain executable files at
//! exactly `<root>/<type_dir>/<event>/<script>` that are not backup artifacts
//! become [`HookPath`]s. Entries are emitted in traversal order.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use entityhooks_core::config::hooks::HooksConfig;
use entityhooks_core::error::{ErrorKind, HookError};
use entityhooks_core::inflect::camelize;
use entityhooks_core::result::HookResult;

use crate::hooks::path::HookPath;

/// Number of path segments below the root: type, event, script.
const HOOK_DEPTH: usize = 3;

/// A filesystem entry below the hooks root with the facts needed to classify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Path segments relative to the root.
    pub segments: Vec<String>,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the running process may execute the entry.
    pub executable: bool,
    /// Whether the filename carries a backup suffix.
    pub backup: bool,
}

impl Candidate {
    /// Returns whether this entry is a hook script.
    pub fn is_hook(&self) -> bool {
        !self.is_dir && self.executable && !self.backup && self.segments.len() == HOOK_DEPTH
    }

    /// Converts an accepted candidate into a [`HookPath`].
    pub fn into_hook(self) -> Option<HookPath> {
        if !self.is_hook() {
            return None;
        }

        let [type_dir, event, script]: [String; HOOK_DEPTH] = self.segments.try_into().ok()?;
        Some(HookPath::new(self.path, camelize(&type_dir), event, script))
    }
}

/// Walks a hooks root and yields hook candidates.
#[derive(Debug, Clone)]
pub struct PathScanner {
    /// Root, symlink and backup-suffix settings.
    config: HooksConfig,
}

impl PathScanner {
    /// Creates a scanner for `root` that ignores only the built-in backup suffixes.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(&HooksConfig::with_root(root))
    }

    /// Creates a scanner from hook configuration.
    pub fn from_config(config: &HooksConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Returns the hooks root.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Lazily walks the root and classifies every entry.
    ///
    /// A missing or unreadable root yields nothing. Failures below the root
    /// are yielded once as [`ErrorKind::Scan`] errors, after which the walk
    /// stops.
    pub fn candidates(&self) -> Candidates<'_> {
        let root = self.root();
        let walker = if root.is_dir() {
            Some(
                WalkDir::new(root)
                    .max_depth(HOOK_DEPTH)
                    .follow_links(self.config.follow_symlinks)
                    .into_iter(),
            )
        } else {
            trace!(root = %root.display(), "Hooks root does not exist");
            None
        };

        Candidates {
            scanner: self,
            walker,
        }
    }

    /// Lazily yields accepted hooks, in traversal order.
    pub fn scan(&self) -> impl Iterator<Item = HookResult<HookPath>> + '_ {
        self.candidates().filter_map(|candidate| match candidate {
            Ok(candidate) => candidate.into_hook().map(Ok),
            Err(e) => Some(Err(e)),
        })
    }

    fn classify(&self, entry: walkdir::DirEntry) -> Candidate {
        let path = entry.into_path();
        // Follows symlinks, so a link to a directory counts as a directory.
        let is_dir = path.is_dir();

        let segments = match relative_segments(self.root(), &path) {
            Some(segments) => segments,
            None => {
                debug!(path = %path.display(), "Skipping hook path that is not valid UTF-8");
                Vec::new()
            }
        };

        let backup = path
            .file_name()
            .map(|name| self.config.is_backup(&name.to_string_lossy()))
            .unwrap_or(false);

        let executable = !is_dir && is_executable(&path);

        Candidate {
            path,
            segments,
            is_dir,
            executable,
            backup,
        }
    }
}

fn relative_segments(root: &Path, path: &Path) -> Option<Vec<String>> {
    path.strip_prefix(root)
        .ok()?
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_str().map(str::to_string)),
            _ => None,
        })
        .collect()
}

/// Lazy iterator over classified entries. Created by [`PathScanner::candidates`].
#[derive(Debug)]
pub struct Candidates<'a> {
    scanner: &'a PathScanner,
    walker: Option<walkdir::IntoIter>,
}

impl Iterator for Candidates<'_> {
    type Item = HookResult<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.as_mut()?.next()? {
                Ok(entry) if entry.depth() == 0 => continue,
                Ok(entry) => return Some(Ok(self.scanner.classify(entry))),
                Err(e) if e.depth() == 0 => {
                    warn!(
                        root = %self.scanner.root().display(),
                        error = %e,
                        "Hooks root is unreadable, treating as empty"
                    );
                    self.walker = None;
                    return None;
                }
                Err(e) => {
                    self.walker = None;
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.scanner.root().display().to_string());
                    return Some(Err(HookError::with_source(
                        ErrorKind::Scan,
                        format!("Failed to scan hooks at '{path}'"),
                        e,
                    )));
                }
            }
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};

    access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
