//! Core contracts for Vaultseed.
//!
//! This crate defines the entity model produced by the seeding pipeline,
//! the per-run batch accumulator handed to commit collaborators, and the
//! error type shared across crates.

pub mod batch;
pub mod entities;
pub mod error;

pub use batch::{BatchCounts, EntityBatches};
pub use entities::{
    Cipher, CipherKind, CipherPlacement, Collection, Folder, Group, GroupGrant, GroupMembership,
    Organization, User, UserGrant,
};
pub use error::{Error, Result};
