//! bugreport system tests
//!
//! Drives the bugreport analyzer against a manifest of test inputs and checks
//! each captured report against an expected prefix.

pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use testing::{Manifest, Verdict};
