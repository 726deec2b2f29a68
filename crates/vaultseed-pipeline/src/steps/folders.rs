use vaultseed_core::{Folder, Result};

use crate::context::SeedContext;
use crate::step::Step;

/// Creates one folder per existing user, registered in roster order so
/// cipher steps can file items by user position. Zero users means zero
/// folders, not an error.
pub struct CreateFoldersStep;

impl Step for CreateFoldersStep {
    fn name(&self) -> &'static str {
        "create-folders"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        let user_ids = ctx.registry.user_ids.clone();
        for user_id in user_ids {
            let folder = Folder::new(user_id, "Imported");
            ctx.registry.folder_ids.push(folder.id);
            ctx.batches.folders.push(folder);
        }
        Ok(())
    }
}
