//! Host type handles that capabilities are attached to.

use std::sync::{Arc, RwLock};

use crate::hooks::key::TypeKey;

use super::capability::{Capability, CapabilitySet};

/// A resolved host type that can be instrumented for hook dispatch.
///
/// Implemented by the host for its own type handles. The registry is keyed
/// by [`TypeKey::type_key`]; the handle itself is only used for attachment.
pub trait HookTarget: TypeKey + Send + Sync {
    /// Returns the capabilities currently attached to this type.
    fn capabilities(&self) -> CapabilitySet;

    /// Attaches a capability. Only called when it is not yet present.
    fn include(&self, capability: Capability);

    /// Returns whether a capability is attached.
    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }
}

impl<T: HookTarget + ?Sized> HookTarget for Arc<T> {
    fn capabilities(&self) -> CapabilitySet {
        (**self).capabilities()
    }

    fn include(&self, capability: Capability) {
        (**self).include(capability)
    }
}

/// In-memory type handle for hosts that track capabilities outside their own types.
#[derive(Debug)]
pub struct ModelType {
    /// Canonical type name.
    name: String,
    /// Attached capabilities.
    capabilities: RwLock<CapabilitySet>,
}

impl ModelType {
    /// Creates a handle with no capabilities.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: RwLock::new(CapabilitySet::new()),
        }
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TypeKey for ModelType {
    fn type_key(&self) -> &str {
        &self.name
    }
}

impl HookTarget for ModelType {
    fn capabilities(&self) -> CapabilitySet {
        *self
            .capabilities
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn include(&self, capability: Capability) {
        self.capabilities
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(capability);
    }
}
