use tracing::debug;
use uuid::Uuid;

use vaultseed_core::{Group, GroupMembership, Result};
use vaultseed_profile::{DensityProfile, MembershipShape};

use crate::context::SeedContext;
use crate::step::Step;

/// Creates groups and distributes the existing users across them.
///
/// Without a density profile, memberships fall back to plain round-robin
/// and every group ID is registered. With one, the configured share of
/// groups stays empty and only the remaining group IDs enter the registry,
/// so later steps never grant into an empty group.
pub struct CreateGroupsStep {
    count: usize,
    density: Option<DensityProfile>,
}

impl CreateGroupsStep {
    pub fn new(count: usize, density: Option<DensityProfile>) -> Self {
        Self { count, density }
    }
}

impl Step for CreateGroupsStep {
    fn name(&self) -> &'static str {
        "create-groups"
    }

    fn execute(&self, ctx: &mut SeedContext) -> Result<()> {
        let org_id = ctx.require_organization()?.id;
        let user_ids = ctx.registry.user_ids.clone();

        let mut groups = Vec::with_capacity(self.count);
        let mut group_ids = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let group = Group::new(org_id, &format!("Group {}", index + 1));
            group_ids.push(group.id);
            groups.push(group);
        }
        ctx.batches.groups.extend(groups);

        let mut memberships = Vec::with_capacity(user_ids.len());
        match &self.density {
            None => {
                if !group_ids.is_empty() && !user_ids.is_empty() {
                    for (index, user_id) in user_ids.iter().enumerate() {
                        memberships.push(GroupMembership {
                            group_id: group_ids[index % group_ids.len()],
                            user_id: *user_id,
                        });
                    }
                }
                ctx.registry.group_ids.extend(group_ids);
            }
            Some(density) => {
                let empty = (group_ids.len() as f64 * density.empty_group_rate) as usize;
                let active: Vec<Uuid> = group_ids[..group_ids.len() - empty].to_vec();

                if !active.is_empty() && !user_ids.is_empty() {
                    let allocations = users_per_group(
                        density.membership_shape,
                        density.membership_skew,
                        active.len(),
                        user_ids.len(),
                    );

                    let mut user_index = 0;
                    for (group_index, allocation) in allocations.iter().enumerate() {
                        for _ in 0..*allocation {
                            memberships.push(GroupMembership {
                                group_id: active[group_index],
                                user_id: user_ids[user_index],
                            });
                            user_index += 1;
                        }
                    }
                }
                ctx.registry.group_ids.extend(active);
            }
        }

        debug!(
            groups = self.count,
            memberships = memberships.len(),
            "groups created"
        );
        ctx.batches.memberships.extend(memberships);
        Ok(())
    }
}

/// Partitions `user_count` memberships across `group_count` groups.
///
/// The returned allocations always sum to exactly `user_count`, for any
/// shape, including when there are more groups than users.
pub fn users_per_group(
    shape: MembershipShape,
    skew: f64,
    group_count: usize,
    user_count: usize,
) -> Vec<usize> {
    if group_count == 0 {
        return Vec::new();
    }
    let mut allocations = vec![0_usize; group_count];

    match shape {
        MembershipShape::Uniform => {
            for index in 0..user_count {
                allocations[index % group_count] += 1;
            }
        }

        MembershipShape::PowerLaw => {
            // Maps skew [0,1] to a Zipf exponent in [0.5, 2.0].
            let exponent = 0.5 + skew * 1.5;
            let mut shares = vec![0.0_f64; group_count];
            let mut total_weight = 0.0;
            for (rank, share) in shares.iter_mut().enumerate() {
                *share = 1.0 / ((rank + 1) as f64).powf(exponent);
                total_weight += *share;
            }

            let mut assigned = 0;
            for (rank, share) in shares.iter_mut().enumerate() {
                *share = *share / total_weight * user_count as f64;
                allocations[rank] = *share as usize;
                assigned += allocations[rank];
            }

            // Largest remainder: the ranks that lost the most to truncation
            // absorb the leftover units, exact ties keeping rank order.
            let remainder = user_count - assigned;
            if remainder > 0 {
                let mut ranks: Vec<usize> = (0..group_count).collect();
                ranks.sort_by(|a, b| {
                    let rem_a = shares[*a] - allocations[*a] as f64;
                    let rem_b = shares[*b] - allocations[*b] as f64;
                    rem_b.partial_cmp(&rem_a).unwrap_or(std::cmp::Ordering::Equal)
                });
                for rank in ranks.into_iter().take(remainder) {
                    allocations[rank] += 1;
                }
            }
        }

        MembershipShape::MegaGroup => {
            // Maps skew [0,1] to a mega-group share in [50%, 95%].
            let fraction = 0.5 + skew * 0.45;
            let mega = (user_count as f64 * fraction) as usize;
            allocations[0] = mega;

            let remaining = user_count - mega;
            if group_count > 1 {
                // The mega group never takes part in the remainder cycle.
                for index in 0..remaining {
                    allocations[1 + (index % (group_count - 1))] += 1;
                }
            } else {
                allocations[0] += remaining;
            }
        }
    }

    allocations
}
