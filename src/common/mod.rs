//! Common utilities shared by the runner and the command line front end

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
