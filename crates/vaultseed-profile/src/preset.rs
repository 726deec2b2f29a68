use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::ProfileError;
use crate::model::{CipherSkew, DensityProfile, FanOutShape, MembershipShape, Permission};
use crate::permissions;

/// Top-level seeding preset document.
///
/// Every block is optional; front-ends resolve the document into target
/// counts and an optional [`DensityProfile`] before building a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedPreset {
    pub organization: Option<PresetOrganization>,
    pub users: Option<PresetCount>,
    pub groups: Option<PresetCount>,
    pub collections: Option<PresetCount>,
    /// Create one folder per user.
    #[serde(default)]
    pub folders: bool,
    pub ciphers: Option<PresetCiphers>,
    pub personal_ciphers: Option<PresetPersonalCiphers>,
    pub density: Option<PresetDensity>,
}

/// Organization block of a preset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetOrganization {
    pub name: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

/// Plain entity count block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetCount {
    pub count: usize,
}

/// Organization cipher block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetCiphers {
    pub count: usize,
    /// File each cipher into the folder of the user it cycles onto.
    #[serde(default)]
    pub assign_folders: bool,
}

/// Personal (non-organization) cipher block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetPersonalCiphers {
    pub count_per_user: usize,
}

/// Density block controlling relationship patterns between entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetDensity {
    pub membership: Option<PresetMembership>,
    pub collection_fan_out: Option<PresetFanOut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_access_ratio: Option<f64>,
    pub permissions: Option<PresetPermissions>,
    pub cipher_assignment: Option<PresetCipherAssignment>,
}

/// How users are distributed across groups.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetMembership {
    pub shape: Option<MembershipShape>,
    pub skew: Option<f64>,
}

/// How collections fan out to groups, plus the empty-group share.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetFanOut {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub shape: Option<FanOutShape>,
    pub empty_group_rate: Option<f64>,
}

/// Permission weights for collection access grants. Omitted fields count
/// as zero; an entirely empty block falls back to the enterprise mix.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetPermissions {
    pub manage: Option<f64>,
    pub read_only: Option<f64>,
    pub hide_passwords: Option<f64>,
    pub read_write: Option<f64>,
}

/// How ciphers are distributed across collections.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetCipherAssignment {
    pub skew: Option<CipherSkew>,
    pub orphan_rate: Option<f64>,
}

impl SeedPreset {
    /// Resolves the preset's density block into a validated profile.
    ///
    /// `Ok(None)` means the preset carries no density block, which selects
    /// the legacy round-robin behavior in every step.
    pub fn density_profile(&self) -> Result<Option<DensityProfile>, ProfileError> {
        let Some(density) = &self.density else {
            return Ok(None);
        };

        let membership = density.membership.unwrap_or_default();
        let fan_out = density.collection_fan_out.unwrap_or_default();
        let cipher = density.cipher_assignment.unwrap_or_default();

        let profile = DensityProfile {
            membership_shape: membership.shape.unwrap_or(MembershipShape::Uniform),
            membership_skew: membership.skew.unwrap_or(0.0),
            fan_out_min: fan_out.min.unwrap_or(1),
            fan_out_max: fan_out.max.unwrap_or(3),
            fan_out_shape: fan_out.shape.unwrap_or(FanOutShape::Uniform),
            empty_group_rate: fan_out.empty_group_rate.unwrap_or(0.0),
            direct_access_ratio: density.direct_access_ratio.unwrap_or(1.0),
            permissions: resolve_permissions(density.permissions.as_ref()),
            cipher_skew: cipher.skew.unwrap_or(CipherSkew::Uniform),
            orphan_cipher_rate: cipher.orphan_rate.unwrap_or(0.0),
        };

        profile.validate()?;
        Ok(Some(profile))
    }
}

fn resolve_permissions(block: Option<&PresetPermissions>) -> Distribution<Permission> {
    let Some(block) = block else {
        return permissions::enterprise();
    };

    let read_only = block.read_only.unwrap_or(0.0);
    let read_write = block.read_write.unwrap_or(0.0);
    let manage = block.manage.unwrap_or(0.0);
    let hide_passwords = block.hide_passwords.unwrap_or(0.0);

    // An empty block (all fields omitted) falls back to the enterprise mix.
    if read_only + read_write + manage + hide_passwords < 0.001 {
        return permissions::enterprise();
    }

    Distribution::new(vec![
        (Permission::ReadOnly, read_only),
        (Permission::ReadWrite, read_write),
        (Permission::Manage, manage),
        (Permission::HidePasswords, hide_passwords),
    ])
}
