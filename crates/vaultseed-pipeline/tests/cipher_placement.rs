use std::collections::HashSet;

use uuid::Uuid;

use vaultseed_core::{Organization, User};
use vaultseed_pipeline::steps::{
    CreateCollectionsStep, CreateFoldersStep, GenerateCiphersStep, placement_index,
};
use vaultseed_pipeline::{SeedContext, Step};
use vaultseed_profile::{CipherSkew, DensityProfile};

fn seeded_context(users: usize, collections: usize) -> SeedContext {
    let mut ctx = SeedContext::new();
    let org = Organization::new("Acme", "acme.example", users as u32 + 1);
    ctx.register_organization(&org);
    ctx.batches.organizations.push(org);
    for index in 0..users {
        let user = User::member("acme.example", index);
        ctx.registry.user_ids.push(user.id);
        ctx.batches.users.push(user);
    }
    if collections > 0 {
        CreateCollectionsStep::new(collections, Some(DensityProfile::default()))
            .execute(&mut ctx)
            .expect("collections step succeeds");
    }
    ctx
}

#[test]
fn orphan_rate_strips_trailing_ciphers() {
    let mut ctx = seeded_context(5, 4);
    let density = DensityProfile {
        orphan_cipher_rate: 0.2,
        ..DensityProfile::default()
    };
    GenerateCiphersStep::new(100, false, Some(density))
        .execute(&mut ctx)
        .expect("ciphers step succeeds");

    assert_eq!(ctx.batches.ciphers.len(), 100);
    assert_eq!(ctx.batches.placements.len(), 80);

    let placed: HashSet<Uuid> = ctx
        .batches
        .placements
        .iter()
        .map(|placement| placement.cipher_id)
        .collect();
    for cipher in &ctx.batches.ciphers[..80] {
        assert!(placed.contains(&cipher.id));
    }
    for cipher in &ctx.batches.ciphers[80..] {
        assert!(!placed.contains(&cipher.id));
    }
}

#[test]
fn heavy_right_concentrates_in_higher_collections() {
    let collection_count = 10;
    let placed = 100;

    let upper_half = |skew: CipherSkew| {
        (0..placed)
            .filter(|index| placement_index(skew, *index, placed, collection_count) >= 5)
            .count()
    };

    let uniform = upper_half(CipherSkew::Uniform);
    let heavy = upper_half(CipherSkew::HeavyRight);
    assert_eq!(uniform, 50);
    assert_eq!(heavy, 75);
    assert!(heavy > uniform);
}

#[test]
fn heavy_right_never_overflows_the_collection_list() {
    for index in 0..40 {
        let slot = placement_index(CipherSkew::HeavyRight, index, 40, 7);
        assert!(slot < 7);
    }
}

#[test]
fn legacy_path_doubles_every_third_cipher() {
    let mut ctx = seeded_context(3, 4);
    GenerateCiphersStep::new(10, false, None)
        .execute(&mut ctx)
        .expect("ciphers step succeeds");

    // Ciphers 0, 3, 6, 9 get a second placement in the next collection.
    assert_eq!(ctx.batches.placements.len(), 14);

    let first = ctx.batches.ciphers[0].id;
    let doubled = ctx
        .batches
        .placements
        .iter()
        .filter(|placement| placement.cipher_id == first)
        .count();
    assert_eq!(doubled, 2);

    let second = ctx.batches.ciphers[1].id;
    let single = ctx
        .batches
        .placements
        .iter()
        .filter(|placement| placement.cipher_id == second)
        .count();
    assert_eq!(single, 1);
}

#[test]
fn legacy_path_with_one_collection_never_doubles() {
    let mut ctx = seeded_context(3, 1);
    GenerateCiphersStep::new(9, false, None)
        .execute(&mut ctx)
        .expect("ciphers step succeeds");
    assert_eq!(ctx.batches.placements.len(), 9);
}

#[test]
fn zero_collections_leave_every_cipher_unplaced() {
    let mut ctx = seeded_context(3, 0);
    GenerateCiphersStep::new(12, false, Some(DensityProfile::default()))
        .execute(&mut ctx)
        .expect("ciphers step succeeds");

    assert_eq!(ctx.batches.ciphers.len(), 12);
    assert!(ctx.batches.placements.is_empty());
}

#[test]
fn folder_assignment_cycles_user_folders() {
    let mut ctx = seeded_context(3, 2);
    CreateFoldersStep
        .execute(&mut ctx)
        .expect("folders step succeeds");
    GenerateCiphersStep::new(7, true, None)
        .execute(&mut ctx)
        .expect("ciphers step succeeds");

    let folder_ids = ctx.registry.folder_ids.clone();
    assert_eq!(folder_ids.len(), 3);
    for (index, cipher) in ctx.batches.ciphers.iter().enumerate() {
        assert_eq!(cipher.folder_id, Some(folder_ids[index % folder_ids.len()]));
    }
}

#[test]
fn zero_ciphers_is_a_no_op() {
    let mut ctx = seeded_context(2, 3);
    let placements_before = ctx.batches.placements.len();
    GenerateCiphersStep::new(0, false, None)
        .execute(&mut ctx)
        .expect("ciphers step succeeds");
    assert!(ctx.batches.ciphers.is_empty());
    assert_eq!(ctx.batches.placements.len(), placements_before);
}
