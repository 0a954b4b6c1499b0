pub mod build;
pub mod clean;
pub mod dangling;
pub mod validate;
pub mod zip;
