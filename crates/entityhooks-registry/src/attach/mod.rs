//! Capability attachment: deciding and applying what a hook-enabled type needs.

pub mod capability;
pub mod policy;
pub mod target;

pub use capability::{Capability, CapabilitySet, LIFECYCLE_EVENTS};
pub use policy::AttachmentPolicy;
pub use target::{HookTarget, ModelType};
