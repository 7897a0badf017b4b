//! EntityHooks — run operator-supplied scripts on host entity lifecycle events.
//!
//! Scripts live under `<root>/<type_dir>/<event>/<script>`. This facade
//! re-exports the workspace crates so hosts depend on one package.

pub use entityhooks_core::{config, error, inflect};
pub use entityhooks_registry::{attach, hooks, observer, prelude, scanner};

pub use entityhooks_core::config::AppConfig;
pub use entityhooks_core::{HookError, HookResult};
pub use entityhooks_registry::{
    AttachmentPolicy, Capability, CapabilitySet, HookPath, HookRegistry, HookTarget, LoadObserver,
    ModelType, ObservedResolver, PathScanner, TypeKey, TypeResolver,
};
