use vaultseed_pipeline::{MemoryCommitter, RecipeBuilder, RecipeExecutor};
use vaultseed_profile::{DensityProfile, MembershipShape};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let density = DensityProfile {
        membership_shape: MembershipShape::MegaGroup,
        membership_skew: 0.5,
        direct_access_ratio: 0.2,
        orphan_cipher_rate: 0.1,
        ..DensityProfile::default()
    };

    let recipe = RecipeBuilder::new("in-memory-demo")
        .create_organization("Acme", "acme.example", 51)
        .add_owner()
        .add_users(50)
        .add_groups(8, Some(density.clone()))
        .add_collections(12, Some(density.clone()))
        .add_folders()
        .add_ciphers(200, true, Some(density))
        .build()?;

    let mut executor = RecipeExecutor::new(MemoryCommitter::new());
    let summary = executor.execute(&recipe)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
