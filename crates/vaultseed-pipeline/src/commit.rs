use vaultseed_core::{EntityBatches, Result};

/// Commit collaborator: accepts the full set of accumulated batches for
/// one run as a single unit of work.
///
/// The pipeline treats the commit as atomic — it either succeeds whole or
/// the run fails; no partial-commit state is reported back.
pub trait Committer {
    fn commit(&mut self, batches: &EntityBatches) -> Result<()>;
}

/// Committer that keeps the batches it is handed in memory. Used by tests
/// and by callers that post-process generated entities themselves.
#[derive(Debug, Default)]
pub struct MemoryCommitter {
    committed: Vec<EntityBatches>,
}

impl MemoryCommitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> &[EntityBatches] {
        &self.committed
    }
}

impl Committer for MemoryCommitter {
    fn commit(&mut self, batches: &EntityBatches) -> Result<()> {
        self.committed.push(batches.clone());
        Ok(())
    }
}
