//! Shared test helpers for integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use entityhooks::{Capability, CapabilitySet, HookRegistry, HookTarget, TypeKey};

/// A temporary hooks root populated file by file.
pub struct HookTree {
    /// Owns the directory for the lifetime of the test
    dir: TempDir,
}

impl HookTree {
    /// Create an empty hooks root
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root path
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write an executable script at `relative`
    pub fn script(&self, relative: &str) -> PathBuf {
        self.file(relative, 0o755)
    }

    /// Write a file at `relative` with the given mode
    pub fn file(&self, relative: &str, mode: u32) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().expect("hook path has a parent"))
            .expect("Failed to create hook dirs");
        fs::write(&path, "#!/bin/sh\nexit 0\n").expect("Failed to write hook");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .expect("Failed to chmod hook");
        path
    }

    /// Unbuilt registry over this tree
    pub fn registry(&self) -> HookRegistry {
        HookRegistry::with_root(self.root())
    }
}

/// Host type double that wraps its lifecycle operations when instrumented.
///
/// Every `create` runs each installed lifecycle wrapper, and each wrapper
/// records the hooks it would invoke.
#[derive(Debug)]
pub struct RecordingModel {
    name: String,
    capabilities: Mutex<CapabilitySet>,
    lifecycle_wrappers: Mutex<usize>,
    invoked: Mutex<Vec<PathBuf>>,
}

impl RecordingModel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            capabilities: Mutex::new(CapabilitySet::new()),
            lifecycle_wrappers: Mutex::new(0),
            invoked: Mutex::new(Vec::new()),
        }
    }

    /// Number of times lifecycle wrapping was installed
    pub fn lifecycle_wrappers(&self) -> usize {
        *self.lifecycle_wrappers.lock().unwrap()
    }

    /// Run the `create` operation once through all installed wrappers
    pub fn create(&self, registry: &HookRegistry) {
        let wrappers = self.lifecycle_wrappers();
        for _ in 0..wrappers {
            if let Some(hooks) = registry.find_hooks(self, "create").unwrap() {
                let mut invoked = self.invoked.lock().unwrap();
                invoked.extend(hooks.iter().map(|h| h.path().to_path_buf()));
            }
        }
    }

    /// Hooks recorded so far
    pub fn invoked(&self) -> Vec<PathBuf> {
        self.invoked.lock().unwrap().clone()
    }
}

impl TypeKey for RecordingModel {
    fn type_key(&self) -> &str {
        &self.name
    }
}

impl HookTarget for RecordingModel {
    fn capabilities(&self) -> CapabilitySet {
        *self.capabilities.lock().unwrap()
    }

    fn include(&self, capability: Capability) {
        self.capabilities.lock().unwrap().insert(capability);
        if capability == Capability::LifecycleOrchestration {
            *self.lifecycle_wrappers.lock().unwrap() += 1;
        }
    }
}
