//! Integration tests for EntityHooks.

#![cfg(unix)]

mod concurrency_test;
mod helpers;
mod registry_test;
