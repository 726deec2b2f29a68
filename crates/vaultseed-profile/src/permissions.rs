//! Pre-configured permission mixes organized by organization size and
//! posture. Presets skew between read-heavy, write-heavy, and manage-heavy
//! so seeded grant tables exercise realistic access review paths.

use crate::distribution::Distribution;
use crate::model::Permission;

/// Enterprise, read-heavy. The production baseline.
pub fn enterprise() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadOnly, 0.82),
        (Permission::ReadWrite, 0.09),
        (Permission::Manage, 0.05),
        (Permission::HidePasswords, 0.04),
    ])
}

/// Enterprise with most users editing shared credentials.
pub fn enterprise_write_heavy() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadWrite, 0.55),
        (Permission::ReadOnly, 0.25),
        (Permission::Manage, 0.10),
        (Permission::HidePasswords, 0.10),
    ])
}

/// Enterprise with a decentralized admin model and many collection managers.
pub fn enterprise_manage_heavy() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::Manage, 0.30),
        (Permission::ReadWrite, 0.30),
        (Permission::ReadOnly, 0.30),
        (Permission::HidePasswords, 0.10),
    ])
}

/// Mid-market, read-heavy: most users consume, leads manage.
pub fn mid_market() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadOnly, 0.55),
        (Permission::ReadWrite, 0.20),
        (Permission::Manage, 0.15),
        (Permission::HidePasswords, 0.10),
    ])
}

/// Mid-market collaborative teams where most users create and edit.
pub fn mid_market_write_heavy() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadWrite, 0.50),
        (Permission::Manage, 0.20),
        (Permission::ReadOnly, 0.20),
        (Permission::HidePasswords, 0.10),
    ])
}

/// Mid-market flat org where many people own their collections.
pub fn mid_market_manage_heavy() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::Manage, 0.40),
        (Permission::ReadWrite, 0.30),
        (Permission::ReadOnly, 0.20),
        (Permission::HidePasswords, 0.10),
    ])
}

/// Small business with tighter controls: onboarding, contractors.
pub fn small_business() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadOnly, 0.40),
        (Permission::ReadWrite, 0.30),
        (Permission::Manage, 0.25),
        (Permission::HidePasswords, 0.05),
    ])
}

/// Small high-trust team where most people edit freely.
pub fn small_business_write_heavy() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadWrite, 0.45),
        (Permission::Manage, 0.35),
        (Permission::ReadOnly, 0.15),
        (Permission::HidePasswords, 0.05),
    ])
}

/// Small business where founders and senior staff own most collections.
pub fn small_business_manage_heavy() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::Manage, 0.50),
        (Permission::ReadWrite, 0.30),
        (Permission::ReadOnly, 0.15),
        (Permission::HidePasswords, 0.05),
    ])
}

/// Tiny starter team, heavy manage, everyone contributes.
pub fn teams_starter() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::Manage, 0.50),
        (Permission::ReadWrite, 0.40),
        (Permission::ReadOnly, 0.10),
    ])
}

/// Shared household: nearly everyone manages everything.
pub fn family() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::Manage, 0.70),
        (Permission::ReadWrite, 0.20),
        (Permission::ReadOnly, 0.10),
    ])
}
