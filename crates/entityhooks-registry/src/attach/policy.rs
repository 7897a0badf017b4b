//! Attachment policy: which capabilities a hook-enabled type receives.
//!
//! - Any of `create`/`update`/`destroy` → [`Capability::LifecycleOrchestration`]
//! - Any event at all → [`Capability::GenericCallback`]
//!
//! Each capability is applied at most once per type. One thread at a time
//! attaches to a given type; others wait for it to settle and then find the
//! capabilities already present. No lock is held while host code runs, so
//! [`HookTarget::include`] may resolve further types, including its own.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::hooks::registry::TypeHookMap;

use super::capability::{Capability, CapabilitySet, LIFECYCLE_EVENTS};
use super::target::HookTarget;

/// Policy shared by every observer created with [`crate::LoadObserver::new`].
static SHARED: Lazy<Arc<AttachmentPolicy>> = Lazy::new(|| Arc::new(AttachmentPolicy::new()));

/// Per-type attachment state.
#[derive(Debug, Default)]
struct TypeSlot {
    state: Mutex<SlotState>,
    settled: Condvar,
}

#[derive(Debug, Default)]
struct SlotState {
    /// Capabilities this policy has seen attached.
    attached: CapabilitySet,
    /// Thread currently applying capabilities, if any.
    applying: Option<ThreadId>,
}

impl TypeSlot {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases a slot when the applying thread is done, even if host code panicked.
struct Applying<'a> {
    slot: &'a TypeSlot,
    recorded: CapabilitySet,
}

impl Drop for Applying<'_> {
    fn drop(&mut self) {
        let mut state = self.slot.lock();
        state.attached.extend(self.recorded.iter());
        state.applying = None;
        drop(state);
        self.slot.settled.notify_all();
    }
}

/// Decides and applies capabilities for hook-enabled types.
#[derive(Debug, Default)]
pub struct AttachmentPolicy {
    /// Type name → attachment state.
    slots: DashMap<String, Arc<TypeSlot>>,
}

impl AttachmentPolicy {
    /// Creates a policy with no attachment records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide policy.
    pub fn shared() -> Arc<AttachmentPolicy> {
        Arc::clone(&SHARED)
    }

    /// Returns the capabilities a type with these events needs.
    pub fn required_capabilities<'a, I>(events: I) -> CapabilitySet
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut required = CapabilitySet::new();
        for event in events {
            if LIFECYCLE_EVENTS.contains(&event) {
                required.insert(Capability::LifecycleOrchestration);
            }
            required.insert(Capability::GenericCallback);
        }
        required
    }

    /// Attaches the capabilities required by `events` to `target`.
    ///
    /// Returns only the capabilities applied by this call; repeat calls for
    /// an already-instrumented type return an empty set. A call made from
    /// inside `target.include` for the same type returns empty immediately.
    pub fn attach<T: HookTarget + ?Sized>(&self, target: &T, events: &TypeHookMap) -> CapabilitySet {
        let required = Self::required_capabilities(events.keys().map(String::as_str));
        if required.is_empty() {
            return CapabilitySet::new();
        }

        let type_name = target.type_key();
        let slot = self.slot(type_name);
        let current = thread::current().id();

        let mut state = slot.lock();
        loop {
            let applying = state.applying;
            match applying {
                None => break,
                Some(owner) if owner == current => {
                    debug!(type_name = %type_name, "Attachment already in progress, skipping");
                    return CapabilitySet::new();
                }
                Some(_) => {
                    state = slot
                        .settled
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
        state.applying = Some(current);
        drop(state);

        let mut guard = Applying {
            slot: &*slot,
            recorded: CapabilitySet::new(),
        };
        let mut applied = CapabilitySet::new();

        for capability in required.iter() {
            if target.has_capability(capability) {
                debug!(
                    type_name = %type_name,
                    capability = %capability,
                    "Capability already attached, skipping"
                );
            } else {
                target.include(capability);
                applied.insert(capability);
                info!(
                    type_name = %type_name,
                    capability = %capability,
                    "Capability attached"
                );
            }
            guard.recorded.insert(capability);
        }

        applied
    }

    /// Returns the capabilities recorded as attached to a type.
    pub fn attached(&self, type_name: &str) -> CapabilitySet {
        self.slots
            .get(type_name)
            .map(|slot| slot.lock().attached)
            .unwrap_or_default()
    }

    fn slot(&self, type_name: &str) -> Arc<TypeSlot> {
        if let Some(slot) = self.slots.get(type_name) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.slots.entry(type_name.to_string()).or_default().value())
    }
}
