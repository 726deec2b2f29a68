//! Density configuration for the Vaultseed pipeline.
//!
//! This crate defines the weighted distribution primitive, the density
//! profile carrying every statistical shape parameter of a seeding run,
//! the permission and cipher-kind preset catalogs, and the JSON preset
//! model front-ends load profiles from.

pub mod distribution;
pub mod error;
pub mod kinds;
pub mod model;
pub mod permissions;
pub mod preset;

pub use distribution::Distribution;
pub use error::ProfileError;
pub use model::{CipherSkew, DensityProfile, FanOutShape, MembershipShape, Permission};
pub use preset::SeedPreset;
