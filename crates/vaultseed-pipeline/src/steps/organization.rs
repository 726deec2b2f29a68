use vaultseed_core::{Organization, Result};

use crate::context::SeedContext;
use crate::step::Step;

/// Creates the organization every later step attaches its entities to.
pub struct CreateOrganizationStep {
    name: String,
    domain: String,
    seats: u32,
}

impl CreateOrganizationStep {
    pub fn new(name: &str, domain: &str, seats: u32) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            seats,
        }
    }
}

impl Step for CreateOrganizationStep {
    fn name(&self) -> &'static str {
        "create-organization"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        let organization = Organization::new(&self.name, &self.domain, self.seats);
        ctx.register_organization(&organization);
        ctx.batches.organizations.push(organization);
        Ok(())
    }
}
