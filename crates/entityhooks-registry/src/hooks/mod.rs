//! Hook paths and the registry that groups them.

pub mod key;
pub mod path;
pub mod registry;

pub use key::TypeKey;
pub use path::HookPath;
pub use registry::HookRegistry;
