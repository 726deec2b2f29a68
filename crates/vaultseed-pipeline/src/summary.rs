use serde::Serialize;
use uuid::Uuid;

use vaultseed_core::BatchCounts;

/// Result of one pipeline run: the seeded organization and what was
/// committed, by kind.
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub organization_id: Uuid,
    pub owner_email: Option<String>,
    pub counts: BatchCounts,
}
