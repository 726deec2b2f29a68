use tracing::info;

use vaultseed_core::Result;

use crate::commit::Committer;
use crate::context::SeedContext;
use crate::recipe::Recipe;
use crate::summary::SeedSummary;

/// Runs a recipe's steps in order against one fresh context, then hands
/// the accumulated batches to the committer as a single unit.
///
/// A failing step aborts the run before anything is committed; a failing
/// commit is the run's single error. There is no partial-success path.
pub struct RecipeExecutor<C> {
    committer: C,
}

impl<C: Committer> RecipeExecutor<C> {
    pub fn new(committer: C) -> Self {
        Self { committer }
    }

    pub fn execute(&mut self, recipe: &Recipe) -> Result<SeedSummary> {
        let mut ctx = SeedContext::new();

        for step in recipe.steps() {
            info!(recipe = recipe.name(), step = step.name(), "executing step");
            step.execute(&mut ctx)?;
        }

        let organization_id = ctx.require_organization()?.id;
        let counts = ctx.batches.counts();
        self.committer.commit(&ctx.batches)?;

        info!(
            recipe = recipe.name(),
            users = counts.users,
            groups = counts.groups,
            collections = counts.collections,
            ciphers = counts.ciphers,
            "run committed"
        );

        Ok(SeedSummary {
            organization_id,
            owner_email: ctx.owner_email().map(|email| email.to_string()),
            counts,
        })
    }

    /// Hands the committer back, e.g. to collect in-memory batches after a
    /// run.
    pub fn into_committer(self) -> C {
        self.committer
    }
}
