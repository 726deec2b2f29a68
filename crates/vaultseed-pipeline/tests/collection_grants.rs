use std::collections::HashSet;

use uuid::Uuid;

use vaultseed_core::{GroupGrant, Organization, User};
use vaultseed_pipeline::steps::{
    CreateCollectionsStep, CreateGroupsStep, apply_group_permissions, build_group_grants, fan_out,
};
use vaultseed_pipeline::{SeedContext, Step};
use vaultseed_profile::{DensityProfile, Distribution, FanOutShape, Permission};

fn seeded_context(users: usize) -> SeedContext {
    let mut ctx = SeedContext::new();
    let org = Organization::new("Acme", "acme.example", users as u32 + 1);
    ctx.register_organization(&org);
    ctx.batches.organizations.push(org);
    for index in 0..users {
        let user = User::member("acme.example", index);
        ctx.registry.user_ids.push(user.id);
        ctx.batches.users.push(user);
    }
    ctx
}

fn ids(count: usize) -> Vec<Uuid> {
    (0..count).map(|_| Uuid::new_v4()).collect()
}

fn equal_permissions() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadOnly, 0.25),
        (Permission::ReadWrite, 0.25),
        (Permission::Manage, 0.25),
        (Permission::HidePasswords, 0.25),
    ])
}

#[test]
fn uniform_fan_out_cycles_through_the_range() {
    assert_eq!(fan_out(FanOutShape::Uniform, 0, 100, 1, 3), 1);
    assert_eq!(fan_out(FanOutShape::Uniform, 1, 100, 1, 3), 2);
    assert_eq!(fan_out(FanOutShape::Uniform, 2, 100, 1, 3), 3);
    assert_eq!(fan_out(FanOutShape::Uniform, 3, 100, 1, 3), 1);
}

#[test]
fn front_loaded_fan_out_maxes_the_first_tenth() {
    for index in 0..10 {
        assert_eq!(fan_out(FanOutShape::FrontLoaded, index, 100, 1, 5), 5);
    }
    for index in 10..100 {
        assert_eq!(fan_out(FanOutShape::FrontLoaded, index, 100, 1, 5), 1);
    }
}

#[test]
fn front_loaded_head_is_at_least_one() {
    assert_eq!(fan_out(FanOutShape::FrontLoaded, 0, 5, 1, 4), 4);
    assert_eq!(fan_out(FanOutShape::FrontLoaded, 1, 5, 1, 4), 1);
}

#[test]
fn power_law_fan_out_stays_inside_the_bounds() {
    assert_eq!(fan_out(FanOutShape::PowerLaw, 0, 50, 1, 5), 5);
    for index in 0..50 {
        let width = fan_out(FanOutShape::PowerLaw, index, 50, 1, 5);
        assert!((1..=5).contains(&width), "index {index} gave {width}");
    }
    assert_eq!(fan_out(FanOutShape::PowerLaw, 49, 50, 1, 5), 1);
}

#[test]
fn degenerate_range_always_returns_min() {
    for shape in [FanOutShape::Uniform, FanOutShape::PowerLaw, FanOutShape::FrontLoaded] {
        assert_eq!(fan_out(shape, 7, 40, 2, 2), 2);
    }
}

#[test]
fn group_grants_never_repeat_a_group_per_collection() {
    let collection_ids = ids(6);
    let group_ids = ids(4);
    let density = DensityProfile {
        fan_out_min: 2,
        fan_out_max: 3,
        direct_access_ratio: 0.0,
        ..DensityProfile::default()
    };

    let grants = build_group_grants(&collection_ids, &group_ids, &density);
    let known: HashSet<Uuid> = group_ids.iter().copied().collect();

    for collection_id in &collection_ids {
        let per_collection: Vec<Uuid> = grants
            .iter()
            .filter(|grant| grant.collection_id == *collection_id)
            .map(|grant| grant.group_id)
            .collect();
        let distinct: HashSet<Uuid> = per_collection.iter().copied().collect();
        assert_eq!(distinct.len(), per_collection.len());
        assert!(per_collection.iter().all(|id| known.contains(id)));
    }
}

#[test]
fn fan_out_is_clamped_to_the_available_groups() {
    let collection_ids = ids(5);
    let group_ids = ids(2);
    let density = DensityProfile {
        fan_out_min: 3,
        fan_out_max: 3,
        ..DensityProfile::default()
    };

    let grants = build_group_grants(&collection_ids, &group_ids, &density);
    assert_eq!(grants.len(), collection_ids.len() * 2);
}

#[test]
fn weighted_permissions_split_grants_exactly() {
    let collection_id = Uuid::new_v4();
    let mut grants: Vec<GroupGrant> = (0..100)
        .map(|_| GroupGrant::new(collection_id, Uuid::new_v4()))
        .collect();
    apply_group_permissions(&mut grants, &equal_permissions());

    let read_only = grants.iter().filter(|g| g.read_only).count();
    let hide = grants.iter().filter(|g| g.hide_passwords).count();
    let manage = grants.iter().filter(|g| g.manage).count();
    let baseline = grants
        .iter()
        .filter(|g| !g.read_only && !g.hide_passwords && !g.manage)
        .count();

    assert_eq!((read_only, baseline, manage, hide), (25, 25, 25, 25));
    for grant in &grants {
        let flags = [grant.read_only, grant.hide_passwords, grant.manage];
        assert!(flags.iter().filter(|flag| **flag).count() <= 1);
    }
}

#[test]
fn direct_access_ratio_limits_granted_users() {
    let mut ctx = seeded_context(10);
    CreateGroupsStep::new(4, Some(DensityProfile::default()))
        .execute(&mut ctx)
        .expect("groups step succeeds");

    let density = DensityProfile {
        direct_access_ratio: 0.5,
        ..DensityProfile::default()
    };
    CreateCollectionsStep::new(5, Some(density))
        .execute(&mut ctx)
        .expect("collections step succeeds");

    let granted: HashSet<Uuid> = ctx
        .batches
        .user_grants
        .iter()
        .map(|grant| grant.user_id)
        .collect();
    let expected: HashSet<Uuid> = ctx.registry.user_ids[..5].iter().copied().collect();
    assert_eq!(granted, expected);

    // Users 0..4 take 1, 2, 3, 1, 2 grants respectively.
    assert_eq!(ctx.batches.user_grants.len(), 9);
    // A ratio below 1.0 also routes access through groups.
    assert!(!ctx.batches.group_grants.is_empty());
}

#[test]
fn all_direct_profile_skips_group_grants() {
    let mut ctx = seeded_context(6);
    CreateGroupsStep::new(3, Some(DensityProfile::default()))
        .execute(&mut ctx)
        .expect("groups step succeeds");
    CreateCollectionsStep::new(4, Some(DensityProfile::default()))
        .execute(&mut ctx)
        .expect("collections step succeeds");

    assert!(ctx.batches.group_grants.is_empty());
    assert_eq!(
        ctx.batches
            .user_grants
            .iter()
            .map(|grant| grant.user_id)
            .collect::<HashSet<Uuid>>()
            .len(),
        6
    );
}

#[test]
fn legacy_path_manages_the_first_grant_per_user() {
    let mut ctx = seeded_context(7);
    CreateCollectionsStep::new(5, None)
        .execute(&mut ctx)
        .expect("collections step succeeds");

    for user_id in &ctx.registry.user_ids {
        let per_user: Vec<_> = ctx
            .batches
            .user_grants
            .iter()
            .filter(|grant| grant.user_id == *user_id)
            .collect();
        assert!(!per_user.is_empty());
        assert!(per_user[0].manage);
        assert!(!per_user[0].read_only);
        assert!(per_user[1..].iter().all(|grant| grant.read_only && !grant.manage));
    }
}

#[test]
fn zero_collections_produce_no_grants() {
    let mut ctx = seeded_context(5);
    CreateCollectionsStep::new(0, Some(DensityProfile::default()))
        .execute(&mut ctx)
        .expect("collections step succeeds");

    assert!(ctx.batches.collections.is_empty());
    assert!(ctx.batches.user_grants.is_empty());
    assert!(ctx.batches.group_grants.is_empty());
}
