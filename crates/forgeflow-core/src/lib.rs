//! ForgeFlow core configuration handling
//!
//! Discovery, parsing and validation of the `forge.conf` key=value
//! configuration file into an immutable [`ForgeConfig`] record.

pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;

pub use config::*;
pub use discovery::*;
pub use error::*;
pub use loader::*;
