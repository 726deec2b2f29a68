//! Cipher kind mixes for generated vault items.

use vaultseed_core::CipherKind;

use crate::distribution::Distribution;

/// Login-heavy mix approximating a production vault.
pub fn realistic() -> Distribution<CipherKind> {
    Distribution::new(vec![
        (CipherKind::Login, 0.62),
        (CipherKind::SecureNote, 0.14),
        (CipherKind::Card, 0.10),
        (CipherKind::Identity, 0.09),
        (CipherKind::SshKey, 0.05),
    ])
}
