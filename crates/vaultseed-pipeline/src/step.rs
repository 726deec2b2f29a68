use vaultseed_core::Result;

use crate::context::SeedContext;

/// A unit of pipeline work.
///
/// Implementations read only IDs already present in the context registry,
/// append new entities to the context batches, and register the IDs later
/// steps will reference. Given the same context state, a step must produce
/// the same relational shape, so the whole pipeline stays deterministic.
pub trait Step {
    fn name(&self) -> &'static str;

    fn execute(&self, ctx: &mut SeedContext) -> Result<()>;
}
