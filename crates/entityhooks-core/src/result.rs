//! Convenience result type alias for EntityHooks.

use crate::error::HookError;

/// A specialized `Result` type for hook subsystem operations.
pub type HookResult<T> = Result<T, HookError>;
