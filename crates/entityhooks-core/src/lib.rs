//! # entityhooks-core
//!
//! Core crate for EntityHooks. Contains the subsystem error type,
//! configuration schemas and the naming inflection used to turn hook
//! directory names into host type names.
//!
//! This crate has **no** internal dependencies on other EntityHooks crates.

pub mod config;
pub mod error;
pub mod inflect;
pub mod result;

pub use error::HookError;
pub use result::HookResult;
