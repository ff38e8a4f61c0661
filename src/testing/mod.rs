//! System test runner
//!
//! Reads a manifest of `<test file>,<expected output>` records, runs the
//! executable under test once per record and compares the second line of
//! its stdout against the expected prefix.

mod classify;
mod executor;
mod manifest;
mod runner;

pub use classify::{classify, Verdict};
pub use executor::{Executor, ProcessExecutor};
pub use manifest::{Manifest, ManifestEntry, ManifestRecord};
pub use runner::{list_manifest, run_manifest, RunReport};
