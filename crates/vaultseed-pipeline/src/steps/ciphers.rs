use tracing::debug;

use vaultseed_core::{Cipher, CipherPlacement, Result};
use vaultseed_profile::{CipherSkew, DensityProfile, kinds};

use crate::context::SeedContext;
use crate::step::Step;

/// Generates organization ciphers and places them into collections.
///
/// Without a density profile, ciphers cycle through the collections and
/// every third cipher also lands in the next collection, so a third of the
/// vault is doubly shared. With a profile, the orphan rate strips trailing
/// ciphers of any placement and the skew shape decides where the rest land.
/// The two paths produce different shapes and are kept separate.
pub struct GenerateCiphersStep {
    count: usize,
    assign_folders: bool,
    density: Option<DensityProfile>,
}

impl GenerateCiphersStep {
    pub fn new(count: usize, assign_folders: bool, density: Option<DensityProfile>) -> Self {
        Self {
            count,
            assign_folders,
            density,
        }
    }
}

impl Step for GenerateCiphersStep {
    fn name(&self) -> &'static str {
        "generate-ciphers"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        if self.count == 0 {
            return Ok(());
        }
        let org_id = ctx.require_organization()?.id;
        let kind_mix = kinds::realistic();
        let folder_ids = if self.assign_folders {
            ctx.registry.folder_ids.clone()
        } else {
            Vec::new()
        };

        let mut ciphers = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let kind = kind_mix.select(index, self.count);
            let mut cipher = Cipher::organizational(org_id, kind, &format!("Item {}", index + 1));
            if !folder_ids.is_empty() {
                cipher.folder_id = Some(folder_ids[index % folder_ids.len()]);
            }
            ciphers.push(cipher);
        }

        let collection_ids = ctx.registry.collection_ids.clone();
        let mut placements = Vec::with_capacity(self.count + self.count / 3);
        if !collection_ids.is_empty() {
            match &self.density {
                None => {
                    for (index, cipher) in ciphers.iter().enumerate() {
                        placements.push(CipherPlacement {
                            cipher_id: cipher.id,
                            collection_id: collection_ids[index % collection_ids.len()],
                        });

                        if index % 3 == 0 && collection_ids.len() > 1 {
                            placements.push(CipherPlacement {
                                cipher_id: cipher.id,
                                collection_id: collection_ids[(index + 1) % collection_ids.len()],
                            });
                        }
                    }
                }
                Some(density) => {
                    let orphans = (self.count as f64 * density.orphan_cipher_rate) as usize;
                    let placed = self.count - orphans;
                    for index in 0..placed {
                        let slot =
                            placement_index(density.cipher_skew, index, placed, collection_ids.len());
                        placements.push(CipherPlacement {
                            cipher_id: ciphers[index].id,
                            collection_id: collection_ids[slot],
                        });
                    }
                }
            }
        }

        for cipher in &ciphers {
            ctx.registry.cipher_ids.push(cipher.id);
        }
        debug!(
            ciphers = ciphers.len(),
            placements = placements.len(),
            "ciphers generated"
        );
        ctx.batches.ciphers.extend(ciphers);
        ctx.batches.placements.extend(placements);
        Ok(())
    }
}

/// Collection index for the non-orphan cipher at `index` of `placed_count`.
/// `placed_count` and `collection_count` must be non-zero.
pub fn placement_index(
    skew: CipherSkew,
    index: usize,
    placed_count: usize,
    collection_count: usize,
) -> usize {
    match skew {
        CipherSkew::Uniform => index % collection_count,
        CipherSkew::HeavyRight => {
            // Square-root curve: later collections accumulate more ciphers.
            let normalized = (index as f64 / placed_count as f64).powf(0.5);
            ((normalized * collection_count as f64) as usize).min(collection_count - 1)
        }
    }
}
