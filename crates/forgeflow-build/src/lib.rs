//! ForgeFlow container image build functionality
//!
//! This crate provides the image build steps for ForgeFlow: image
//! reference assembly, artifact and entitlement staging, image building
//! and pushing to container registries.

pub mod artifacts;
pub mod builder;
pub mod entitlements;
pub mod error;
pub mod pusher;
pub mod reference;

pub use artifacts::{ARTIFACTS_DIR, fetch_artifacts};
pub use builder::ImageBuilder;
pub use entitlements::{ENTITLEMENTS_DIR, clear_entitlements, fetch_entitlements};
pub use error::{BuildError, BuildResult};
pub use pusher::ImagePusher;
pub use reference::{image_reference, reference_from_config};
