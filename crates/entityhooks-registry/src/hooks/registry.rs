//! Hook registry: the process-wide `{type -> {event -> sorted hooks}}` map.
//!
//! The map is built on first query and never refreshed. Concurrent first
//! queries block on a single scan; a failed scan is not memoized, so the
//! next query scans again.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use entityhooks_core::config::hooks::HooksConfig;
use entityhooks_core::error::HookError;
use entityhooks_core::result::HookResult;

use super::key::TypeKey;
use super::path::HookPath;
use crate::scanner::PathScanner;

/// Hooks for one `(type, event)` pair, sorted by path. Never empty.
pub type EventHookList = Vec<HookPath>;

/// Event name → hooks, for one type.
pub type TypeHookMap = BTreeMap<String, EventHookList>;

/// Type name → events.
pub type HookMap = BTreeMap<String, TypeHookMap>;

/// Registry installed with [`HookRegistry::install`].
static GLOBAL: OnceCell<Arc<HookRegistry>> = OnceCell::new();

/// Build-once registry of discovered hooks.
#[derive(Debug)]
pub struct HookRegistry {
    /// Scanner used for the one-time build.
    scanner: PathScanner,
    /// The built map.
    hooks: OnceCell<HookMap>,
    /// Number of scans started, including failed ones.
    scans: AtomicUsize,
}

impl HookRegistry {
    /// Creates an unbuilt registry over `scanner`.
    pub fn new(scanner: PathScanner) -> Self {
        Self {
            scanner,
            hooks: OnceCell::new(),
            scans: AtomicUsize::new(0),
        }
    }

    /// Creates an unbuilt registry from hook configuration.
    pub fn from_config(config: &HooksConfig) -> Self {
        Self::new(PathScanner::from_config(config))
    }

    /// Creates an unbuilt registry rooted at `root`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self::new(PathScanner::new(root.as_ref()))
    }

    /// Installs the process-wide registry.
    ///
    /// Fails with a conflict error if one is already installed.
    pub fn install(registry: Arc<HookRegistry>) -> HookResult<Arc<HookRegistry>> {
        GLOBAL.set(registry).map_err(|_| {
            HookError::conflict("A process-wide hook registry is already installed")
        })?;
        Self::global().ok_or_else(|| HookError::internal("Installed hook registry vanished"))
    }

    /// Returns the process-wide registry, if installed.
    pub fn global() -> Option<Arc<HookRegistry>> {
        GLOBAL.get().cloned()
    }

    /// Returns the hooks root this registry scans.
    pub fn root(&self) -> &Path {
        self.scanner.root()
    }

    /// Returns whether the one-time build has completed.
    pub fn is_built(&self) -> bool {
        self.hooks.get().is_some()
    }

    /// Returns the number of filesystem scans started so far.
    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Returns the full hook map, building it on first call.
    pub fn hooks(&self) -> HookResult<&HookMap> {
        self.hooks.get_or_try_init(|| self.build())
    }

    /// Returns the distinct event names across all types.
    pub fn events(&self) -> HookResult<BTreeSet<String>> {
        Ok(self
            .hooks()?
            .values()
            .flat_map(|events| events.keys().cloned())
            .collect())
    }

    /// Returns the distinct event names registered for one type.
    pub fn events_for<K: TypeKey + ?Sized>(&self, target: &K) -> HookResult<BTreeSet<String>> {
        Ok(self
            .type_hooks(target)?
            .map(|events| events.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Returns the hooks for one `(type, event)` pair in execution order.
    ///
    /// `None` when the type or event has no hooks.
    pub fn find_hooks<K: TypeKey + ?Sized>(
        &self,
        target: &K,
        event: &str,
    ) -> HookResult<Option<&[HookPath]>> {
        Ok(self
            .type_hooks(target)?
            .and_then(|events| events.get(event))
            .filter(|hooks| !hooks.is_empty())
            .map(Vec::as_slice))
    }

    /// Returns the event map for one type, if it has any hooks.
    pub fn type_hooks<K: TypeKey + ?Sized>(&self, target: &K) -> HookResult<Option<&TypeHookMap>> {
        Ok(self.hooks()?.get(target.type_key()))
    }

    /// Returns every type name that has hooks.
    pub fn types(&self) -> HookResult<Vec<&str>> {
        Ok(self.hooks()?.keys().map(String::as_str).collect())
    }

    /// Returns the total number of registered hooks.
    pub fn hook_count(&self) -> HookResult<usize> {
        Ok(self
            .hooks()?
            .values()
            .flat_map(|events| events.values())
            .map(Vec::len)
            .sum())
    }

    fn build(&self) -> HookResult<HookMap> {
        self.scans.fetch_add(1, Ordering::SeqCst);

        let mut hooks = HookMap::new();
        for hook in self.scanner.scan() {
            let hook = hook?;
            debug!(
                type_name = %hook.type_name(),
                event = %hook.event(),
                script = %hook.script_name(),
                "Found hook"
            );
            hooks
                .entry(hook.type_name().to_string())
                .or_default()
                .entry(hook.event().to_string())
                .or_default()
                .push(hook);
        }

        let mut total = 0;
        for (type_name, events) in hooks.iter_mut() {
            for (event, list) in events.iter_mut() {
                list.sort();
                total += list.len();
                info!(
                    type_name = %type_name,
                    event = %event,
                    count = list.len(),
                    "Finished registering hooks"
                );
            }
        }

        info!(
            root = %self.scanner.root().display(),
            types = hooks.len(),
            hooks = total,
            "Hook registry built"
        );

        Ok(hooks)
    }
}
