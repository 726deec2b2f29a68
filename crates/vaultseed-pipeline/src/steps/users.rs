use tracing::debug;

use vaultseed_core::{Result, User};

use crate::context::SeedContext;
use crate::step::Step;

/// Adds the owner account of the seeded organization.
pub struct AddOwnerStep;

impl Step for AddOwnerStep {
    fn name(&self) -> &'static str {
        "add-owner"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        let domain = ctx.require_organization()?.domain.clone();
        let owner = User::owner(&domain);
        ctx.set_owner_email(owner.email.clone());
        ctx.registry.user_ids.push(owner.id);
        ctx.batches.users.push(owner);
        Ok(())
    }
}

/// Adds regular member accounts, registered in roster order so later steps
/// can address users positionally.
pub struct AddUsersStep {
    count: usize,
}

impl AddUsersStep {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Step for AddUsersStep {
    fn name(&self) -> &'static str {
        "add-users"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        let domain = ctx.require_organization()?.domain.clone();

        let mut users = Vec::with_capacity(self.count);
        for index in 0..self.count {
            users.push(User::member(&domain, index));
        }

        for user in &users {
            ctx.registry.user_ids.push(user.id);
        }
        debug!(count = self.count, "users added");
        ctx.batches.users.extend(users);
        Ok(())
    }
}
