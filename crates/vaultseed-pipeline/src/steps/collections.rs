use uuid::Uuid;

use vaultseed_core::{Collection, GroupGrant, Result, UserGrant};
use vaultseed_profile::{DensityProfile, Distribution, FanOutShape, Permission};

use crate::context::SeedContext;
use crate::step::Step;

/// Creates collections and wires access grants to groups and users.
///
/// Without a density profile, every user gets one to three direct grants
/// cycling through the collections, the first of them managed. With one,
/// group grants follow the configured fan-out shape and a share of users
/// sized by the direct-access ratio gets direct grants, both stamped with
/// weighted permissions.
pub struct CreateCollectionsStep {
    count: usize,
    density: Option<DensityProfile>,
}

impl CreateCollectionsStep {
    pub fn new(count: usize, density: Option<DensityProfile>) -> Self {
        Self { count, density }
    }
}

impl Step for CreateCollectionsStep {
    fn name(&self) -> &'static str {
        "create-collections"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        let org_id = ctx.require_organization()?.id;

        let mut collections = Vec::with_capacity(self.count);
        let mut collection_ids = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let collection = Collection::new(org_id, &format!("Collection {}", index + 1));
            collection_ids.push(collection.id);
            collections.push(collection);
        }
        ctx.batches.collections.extend(collections);
        ctx.registry.collection_ids.extend(collection_ids.iter().copied());

        if collection_ids.is_empty() {
            return Ok(());
        }

        let user_ids = ctx.registry.user_ids.clone();

        match &self.density {
            None => {
                let mut grants = Vec::new();
                for (index, user_id) in user_ids.iter().enumerate() {
                    let assignments = (index % 3 + 1).min(collection_ids.len());
                    for j in 0..assignments {
                        let mut grant = UserGrant::new(
                            collection_ids[(index + j) % collection_ids.len()],
                            *user_id,
                        );
                        grant.read_only = j > 0;
                        grant.manage = j == 0;
                        grants.push(grant);
                    }
                }
                ctx.batches.user_grants.extend(grants);
            }
            Some(density) => {
                let group_ids = ctx.registry.group_ids.clone();
                if density.direct_access_ratio < 1.0 && !group_ids.is_empty() {
                    let mut grants = build_group_grants(&collection_ids, &group_ids, density);
                    apply_group_permissions(&mut grants, &density.permissions);
                    ctx.batches.group_grants.extend(grants);
                }

                let direct_users = (user_ids.len() as f64 * density.direct_access_ratio) as usize;
                if direct_users > 0 {
                    let mut grants = build_user_grants(&collection_ids, &user_ids, direct_users);
                    apply_user_permissions(&mut grants, &density.permissions);
                    ctx.batches.user_grants.extend(grants);
                }
            }
        }

        Ok(())
    }
}

/// Number of groups granted to the collection at `index` of `count`,
/// before clamping to the available group count. Bounds come from a
/// validated profile, so `min <= max` holds.
pub fn fan_out(shape: FanOutShape, index: usize, count: usize, min: usize, max: usize) -> usize {
    let range = max - min + 1;
    if range <= 1 {
        return min;
    }

    match shape {
        FanOutShape::Uniform => min + (index % range),
        FanOutShape::PowerLaw => {
            // Zipf weight normalized against index 0, scaled into [min, max].
            let weight = 1.0 / ((index + 1) as f64).powf(0.8);
            min + (weight * (range - 1) as f64 + 0.5) as usize
        }
        FanOutShape::FrontLoaded => {
            // The first tenth of collections (at least one) get the max.
            let head = count.div_ceil(10).max(1);
            if index < head { max } else { min }
        }
    }
}

/// Builds group grants for every collection. Group picks cycle from the
/// collection's own index, so no group is granted twice to the same
/// collection and successive collections cover all groups.
pub fn build_group_grants(
    collection_ids: &[Uuid],
    group_ids: &[Uuid],
    density: &DensityProfile,
) -> Vec<GroupGrant> {
    let min = density.fan_out_min;
    let max = density.fan_out_max;
    let mut grants = Vec::with_capacity(collection_ids.len() * (min + max + 1) / 2);

    for (c, collection_id) in collection_ids.iter().enumerate() {
        let width = fan_out(density.fan_out_shape, c, collection_ids.len(), min, max)
            .min(group_ids.len());
        for g in 0..width {
            grants.push(GroupGrant::new(
                *collection_id,
                group_ids[(c + g) % group_ids.len()],
            ));
        }
    }

    grants
}

/// Builds direct grants for the first `direct_user_count` users: one to
/// three grants each, cycling through the collections.
pub fn build_user_grants(
    collection_ids: &[Uuid],
    user_ids: &[Uuid],
    direct_user_count: usize,
) -> Vec<UserGrant> {
    let mut grants = Vec::with_capacity(direct_user_count * 2);
    for index in 0..direct_user_count {
        let assignments = (index % 3 + 1).min(collection_ids.len());
        for j in 0..assignments {
            grants.push(UserGrant::new(
                collection_ids[(index + j) % collection_ids.len()],
                user_ids[index],
            ));
        }
    }
    grants
}

/// Stamps each group grant with the weighted permission for its position.
/// At most one flag ends up true; the read/write baseline leaves all false.
pub fn apply_group_permissions(grants: &mut [GroupGrant], permissions: &Distribution<Permission>) {
    let total = grants.len();
    for (index, grant) in grants.iter_mut().enumerate() {
        let (read_only, hide_passwords, manage) = permissions.select(index, total).flags();
        grant.read_only = read_only;
        grant.hide_passwords = hide_passwords;
        grant.manage = manage;
    }
}

/// Stamps each direct user grant with the weighted permission for its
/// position, same flag rules as group grants.
pub fn apply_user_permissions(grants: &mut [UserGrant], permissions: &Distribution<Permission>) {
    let total = grants.len();
    for (index, grant) in grants.iter_mut().enumerate() {
        let (read_only, hide_passwords, manage) = permissions.select(index, total).flags();
        grant.read_only = read_only;
        grant.hide_passwords = hide_passwords;
        grant.manage = manage;
    }
}
