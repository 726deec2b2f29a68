use uuid::Uuid;

use vaultseed_core::{EntityBatches, Error, Organization, Result};

/// Ordered IDs of already-created entities, appended by steps as they run
/// and read by later steps to reference earlier entities.
///
/// A step may only reference IDs that are present when it executes; that
/// rule is what fixes the execution order of a recipe.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    pub user_ids: Vec<Uuid>,
    pub group_ids: Vec<Uuid>,
    pub collection_ids: Vec<Uuid>,
    pub folder_ids: Vec<Uuid>,
    pub cipher_ids: Vec<Uuid>,
}

/// Handle to the organization a run seeds into.
#[derive(Debug, Clone)]
pub struct OrgHandle {
    pub id: Uuid,
    pub domain: String,
}

/// Shared exchange point for one pipeline run.
///
/// A context is created fresh per run and exclusively owns every entity
/// batch and ID registry until the final commit hand-off, after which it is
/// discarded.
#[derive(Debug, Default)]
pub struct SeedContext {
    organization: Option<OrgHandle>,
    owner_email: Option<String>,
    pub registry: IdRegistry,
    pub batches: EntityBatches,
}

impl SeedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the organization later steps attach their entities to.
    pub fn register_organization(&mut self, organization: &Organization) {
        self.organization = Some(OrgHandle {
            id: organization.id,
            domain: organization.domain.clone(),
        });
    }

    pub fn set_owner_email(&mut self, email: String) {
        self.owner_email = Some(email);
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.owner_email.as_deref()
    }

    /// Organization handle, or an ordering error when no organization step
    /// has run yet.
    pub fn require_organization(&self) -> Result<&OrgHandle> {
        self.organization.as_ref().ok_or_else(|| {
            Error::Ordering("no organization has been created in this run".to_string())
        })
    }
}
