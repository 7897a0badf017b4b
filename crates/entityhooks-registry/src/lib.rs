//! # entityhooks-registry
//!
//! Discovers executable hook scripts laid out as
//! `<root>/<type_dir>/<event>/<script>` and exposes them to a host
//! application. Provides:
//!
//! - [`PathScanner`]: lazy, classified walk of the hooks directory
//! - [`HookRegistry`]: build-once `{type -> {event -> sorted paths}}` map
//! - [`AttachmentPolicy`]: at-most-once capability attachment per type
//! - [`LoadObserver`]: reacts to host type-resolution notifications

pub mod attach;
pub mod hooks;
pub mod observer;
pub mod prelude;
pub mod scanner;

pub use attach::capability::{Capability, CapabilitySet, LIFECYCLE_EVENTS};
pub use attach::policy::AttachmentPolicy;
pub use attach::target::{HookTarget, ModelType};
pub use hooks::key::TypeKey;
pub use hooks::path::HookPath;
pub use hooks::registry::{EventHookList, HookMap, HookRegistry, TypeHookMap};
pub use observer::{LoadObserver, ObservedResolver, TypeResolver};
pub use scanner::{Candidate, PathScanner};
