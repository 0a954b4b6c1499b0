//! External command execution for ForgeFlow
//!
//! Every collaborator (Maven, the container engine, the archiver) is an
//! external process. This crate provides the seam: a runner trait, the
//! system implementation, and a scripted fake for tests.

pub mod error;
pub mod fake;
pub mod runner;

pub use error::*;
pub use fake::*;
pub use runner::*;
