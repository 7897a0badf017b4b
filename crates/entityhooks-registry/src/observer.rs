//! Type-load observer.
//!
//! The host notifies the observer whenever a type name is resolved. If the
//! registry has hooks under that exact name, the resolved handle is passed to
//! the [`AttachmentPolicy`]. Types without hooks are ignored.
//!
//! Hosts with a resolver seam can wrap it in [`ObservedResolver`], which runs
//! the observer and returns the inner resolver's result unchanged.

use std::sync::Arc;

use tracing::debug;

use entityhooks_core::error::HookError;
use entityhooks_core::result::HookResult;

use crate::attach::capability::CapabilitySet;
use crate::attach::policy::AttachmentPolicy;
use crate::attach::target::HookTarget;
use crate::hooks::registry::HookRegistry;

/// The host's type resolution extension point.
pub trait TypeResolver {
    /// Resolved type handle.
    type Handle: HookTarget;
    /// Host resolution error; must be able to carry hook subsystem failures.
    type Error: From<HookError>;

    /// Resolves a type by name. `Ok(None)` when no such type exists.
    fn resolve(&self, name: &str) -> Result<Option<Self::Handle>, Self::Error>;
}

/// Attaches capabilities to types as the host resolves them.
#[derive(Debug)]
pub struct LoadObserver {
    /// Registry consulted by name.
    registry: Arc<HookRegistry>,
    /// Policy applied to types with hooks.
    policy: Arc<AttachmentPolicy>,
}

impl LoadObserver {
    /// Creates an observer using the process-wide [`AttachmentPolicy::shared`].
    ///
    /// Every observer built this way attaches under the same per-type slots,
    /// so a type is instrumented at most once across all of them.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self::with_policy(registry, AttachmentPolicy::shared())
    }

    /// Creates an observer with a caller-owned attachment policy.
    ///
    /// The at-most-once guarantee then holds only among observers sharing
    /// `policy`.
    pub fn with_policy(registry: Arc<HookRegistry>, policy: Arc<AttachmentPolicy>) -> Self {
        Self { registry, policy }
    }

    /// Handles a type-resolved notification.
    ///
    /// Returns the capabilities newly applied to `handle`; empty when the type
    /// has no hooks or was already instrumented. Fails only if the registry
    /// cannot be built.
    pub fn on_type_resolved<T: HookTarget + ?Sized>(&self, handle: &T) -> HookResult<CapabilitySet> {
        let Some(events) = self.registry.type_hooks(handle)? else {
            return Ok(CapabilitySet::new());
        };

        debug!(
            type_name = %handle.type_key(),
            events = events.len(),
            "Resolved type has hooks"
        );

        Ok(self.policy.attach(handle, events))
    }

    /// Returns the registry this observer consults.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }

    /// Returns the attachment policy.
    pub fn policy(&self) -> &Arc<AttachmentPolicy> {
        &self.policy
    }
}

/// A resolver chained through a [`LoadObserver`].
#[derive(Debug)]
pub struct ObservedResolver<R> {
    /// The host's original resolver.
    inner: R,
    /// Observer notified after each successful resolution.
    observer: Arc<LoadObserver>,
}

impl<R> ObservedResolver<R> {
    /// Chains `inner` through `observer`.
    pub fn new(inner: R, observer: Arc<LoadObserver>) -> Self {
        Self { inner, observer }
    }

    /// Returns the wrapped resolver.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: TypeResolver> TypeResolver for ObservedResolver<R> {
    type Handle = R::Handle;
    type Error = R::Error;

    fn resolve(&self, name: &str) -> Result<Option<Self::Handle>, Self::Error> {
        let resolved = self.inner.resolve(name)?;
        if let Some(handle) = &resolved {
            self.observer.on_type_resolved(handle)?;
        }
        Ok(resolved)
    }
}
