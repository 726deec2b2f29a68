use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::ProfileError;
use crate::permissions;

/// User-to-group membership distribution shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum MembershipShape {
    /// Round-robin membership across groups.
    Uniform,
    /// Zipf-like front-heavy membership.
    PowerLaw,
    /// One group holds a dominant majority of all memberships.
    MegaGroup,
}

/// Distribution shape for collection-to-group fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FanOutShape {
    /// Fan-out cycles through the [min, max] range.
    Uniform,
    /// Early collections reach toward max, the tail settles at min.
    PowerLaw,
    /// The first tenth of collections get max, everything else min.
    FrontLoaded,
}

/// Skew shape for cipher-to-collection placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CipherSkew {
    Uniform,
    HeavyRight,
}

/// Collection access permission categories for weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    ReadWrite,
    ReadOnly,
    HidePasswords,
    Manage,
}

impl Permission {
    /// Flag triple `(read_only, hide_passwords, manage)` for a grant.
    /// `ReadWrite` is the unflagged baseline: all three stay false.
    pub fn flags(self) -> (bool, bool, bool) {
        match self {
            Permission::ReadOnly => (true, false, false),
            Permission::HidePasswords => (false, true, false),
            Permission::Manage => (false, false, true),
            Permission::ReadWrite => (false, false, false),
        }
    }
}

/// Controls relationship density between users, groups, collections, and
/// ciphers within a seeded organization.
///
/// When no profile is supplied, every step falls back to its legacy
/// round-robin behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DensityProfile {
    /// User-to-group membership distribution shape.
    pub membership_shape: MembershipShape,
    /// Skew intensity for power-law and mega-group shapes (0.0-1.0).
    /// Ignored for the uniform shape.
    pub membership_skew: f64,
    /// Minimum groups granted per collection.
    pub fan_out_min: usize,
    /// Maximum groups granted per collection.
    pub fan_out_max: usize,
    /// Distribution shape for collection-to-group fan-out.
    pub fan_out_shape: FanOutShape,
    /// Fraction of groups with zero members (0.0-1.0).
    pub empty_group_rate: f64,
    /// Fraction of access paths that are direct user grants (0.0-1.0).
    /// 1.0 = all direct, 0.0 = all group-mediated.
    pub direct_access_ratio: f64,
    /// Permission weighting for collection access grants.
    pub permissions: Distribution<Permission>,
    /// Cipher-to-collection placement skew shape.
    pub cipher_skew: CipherSkew,
    /// Fraction of org ciphers with no collection placement (0.0-1.0).
    pub orphan_cipher_rate: f64,
}

impl Default for DensityProfile {
    fn default() -> Self {
        Self {
            membership_shape: MembershipShape::Uniform,
            membership_skew: 0.0,
            fan_out_min: 1,
            fan_out_max: 3,
            fan_out_shape: FanOutShape::Uniform,
            empty_group_rate: 0.0,
            direct_access_ratio: 1.0,
            permissions: permissions::enterprise(),
            cipher_skew: CipherSkew::Uniform,
            orphan_cipher_rate: 0.0,
        }
    }
}

impl DensityProfile {
    /// Rejects profiles that violate the documented invariants, before any
    /// entity is generated.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_rate("membershipSkew", self.membership_skew)?;
        check_rate("emptyGroupRate", self.empty_group_rate)?;
        check_rate("directAccessRatio", self.direct_access_ratio)?;
        check_rate("orphanCipherRate", self.orphan_cipher_rate)?;
        if self.fan_out_min > self.fan_out_max {
            return Err(ProfileError::FanOutBounds {
                min: self.fan_out_min,
                max: self.fan_out_max,
            });
        }
        self.permissions.validate()
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<(), ProfileError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ProfileError::RateOutOfRange { field, value });
    }
    Ok(())
}
