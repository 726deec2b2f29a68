use vaultseed_core::{Cipher, Result};
use vaultseed_profile::kinds;

use crate::context::SeedContext;
use crate::step::Step;

/// Generates per-user personal ciphers outside the organization vault.
/// They get no collection placement; when folders exist each item is filed
/// into its owner's folder.
pub struct AddPersonalCiphersStep {
    count_per_user: usize,
}

impl AddPersonalCiphersStep {
    pub fn new(count_per_user: usize) -> Self {
        Self { count_per_user }
    }
}

impl Step for AddPersonalCiphersStep {
    fn name(&self) -> &'static str {
        "add-personal-ciphers"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        if self.count_per_user == 0 {
            return Ok(());
        }

        let user_ids = ctx.registry.user_ids.clone();
        let folder_ids = ctx.registry.folder_ids.clone();
        let kind_mix = kinds::realistic();
        let total = user_ids.len() * self.count_per_user;

        let mut generated = 0;
        for (user_index, user_id) in user_ids.iter().enumerate() {
            for item in 0..self.count_per_user {
                let kind = kind_mix.select(generated, total);
                let mut cipher =
                    Cipher::personal(*user_id, kind, &format!("Personal Item {}", item + 1));
                if !folder_ids.is_empty() {
                    cipher.folder_id = Some(folder_ids[user_index % folder_ids.len()]);
                }
                ctx.registry.cipher_ids.push(cipher.id);
                ctx.batches.ciphers.push(cipher);
                generated += 1;
            }
        }

        Ok(())
    }
}
