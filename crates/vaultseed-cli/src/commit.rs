use std::path::{Path, PathBuf};

use serde::Serialize;

use vaultseed_core::{EntityBatches, Error, Result};
use vaultseed_pipeline::Committer;

/// Writes each entity batch as a CSV file in the run directory.
///
/// The commit is all-or-nothing from the pipeline's point of view: any
/// write failure fails the whole run.
#[derive(Debug)]
pub struct CsvCommitter {
    out_dir: PathBuf,
}

impl CsvCommitter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Committer for CsvCommitter {
    fn commit(&mut self, batches: &EntityBatches) -> Result<()> {
        write_batches(&self.out_dir, batches).map_err(|err| Error::Commit(err.to_string()))
    }
}

fn write_batches(dir: &Path, batches: &EntityBatches) -> std::result::Result<(), csv::Error> {
    write_csv(dir.join("organizations.csv"), &batches.organizations)?;
    write_csv(dir.join("users.csv"), &batches.users)?;
    write_csv(dir.join("groups.csv"), &batches.groups)?;
    write_csv(dir.join("group_memberships.csv"), &batches.memberships)?;
    write_csv(dir.join("collections.csv"), &batches.collections)?;
    write_csv(dir.join("group_grants.csv"), &batches.group_grants)?;
    write_csv(dir.join("user_grants.csv"), &batches.user_grants)?;
    write_csv(dir.join("folders.csv"), &batches.folders)?;
    write_csv(dir.join("ciphers.csv"), &batches.ciphers)?;
    write_csv(dir.join("cipher_placements.csv"), &batches.placements)?;
    Ok(())
}

fn write_csv<T: Serialize>(path: PathBuf, rows: &[T]) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
