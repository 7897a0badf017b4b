//! Prelude for host integrations.

pub use entityhooks_core::{HookError, HookResult};

pub use crate::attach::capability::{Capability, CapabilitySet};
pub use crate::attach::policy::AttachmentPolicy;
pub use crate::attach::target::HookTarget;
pub use crate::hooks::key::TypeKey;
pub use crate::hooks::path::HookPath;
pub use crate::hooks::registry::HookRegistry;
pub use crate::observer::{LoadObserver, TypeResolver};
