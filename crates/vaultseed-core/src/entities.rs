use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Seeded organization that owns every other entity in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub domain: String,
    pub billing_email: String,
    pub seats: u32,
}

impl Organization {
    pub fn new(name: &str, domain: &str, seats: u32) -> Self {
        let tag = short_hash(domain);
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            domain: domain.to_string(),
            billing_email: format!("billing{tag}@{tag}.{domain}"),
            seats,
        }
    }
}

/// Derives a deterministic 8-char hex tag from a domain. Billing emails
/// must never be deliverable, so the mailbox and subdomain are both tagged.
fn short_hash(domain: &str) -> String {
    let digest = Sha256::digest(domain.as_bytes());
    digest[..4].iter().map(|byte| format!("{byte:02x}")).collect()
}

/// A seeded account. Emails are positional, never realistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl User {
    /// The organization owner account.
    pub fn owner(domain: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: format!("owner@{domain}"),
            name: "Owner".to_string(),
        }
    }

    /// Regular member at a 0-based position in the roster.
    pub fn member(domain: &str, index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: format!("user{:05}@{domain}", index + 1),
            name: format!("User {}", index + 1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
}

impl Group {
    pub fn new(organization_id: Uuid, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name: name.to_string(),
        }
    }
}

/// (group, user) membership pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub group_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
}

impl Collection {
    pub fn new(organization_id: Uuid, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name: name.to_string(),
        }
    }
}

/// Group-mediated access grant to a collection.
///
/// At most one of the three flags is true; all false is the read/write
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupGrant {
    pub collection_id: Uuid,
    pub group_id: Uuid,
    pub read_only: bool,
    pub hide_passwords: bool,
    pub manage: bool,
}

impl GroupGrant {
    pub fn new(collection_id: Uuid, group_id: Uuid) -> Self {
        Self {
            collection_id,
            group_id,
            read_only: false,
            hide_passwords: false,
            manage: false,
        }
    }
}

/// Direct per-user access grant to a collection. Same flag rules as
/// [`GroupGrant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGrant {
    pub collection_id: Uuid,
    pub user_id: Uuid,
    pub read_only: bool,
    pub hide_passwords: bool,
    pub manage: bool,
}

impl UserGrant {
    pub fn new(collection_id: Uuid, user_id: Uuid) -> Self {
        Self {
            collection_id,
            user_id,
            read_only: false,
            hide_passwords: false,
            manage: false,
        }
    }
}

/// Personal folder a user files ciphers into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
}

impl Folder {
    pub fn new(user_id: Uuid, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
        }
    }
}

/// Vault item categories carried by generated ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CipherKind {
    Login,
    SecureNote,
    Card,
    Identity,
    SshKey,
}

/// A vault item, owned either by the organization or by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cipher {
    pub id: Uuid,
    pub organization_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub folder_id: Option<Uuid>,
    pub kind: CipherKind,
    pub name: String,
}

impl Cipher {
    pub fn organizational(organization_id: Uuid, kind: CipherKind, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id: Some(organization_id),
            user_id: None,
            folder_id: None,
            kind,
            name: name.to_string(),
        }
    }

    pub fn personal(user_id: Uuid, kind: CipherKind, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id: None,
            user_id: Some(user_id),
            folder_id: None,
            kind,
            name: name.to_string(),
        }
    }
}

/// (cipher, collection) placement pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherPlacement {
    pub cipher_id: Uuid,
    pub collection_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_email_is_deterministic_and_offsite() {
        let first = Organization::new("Acme", "acme.example", 10);
        let second = Organization::new("Acme", "acme.example", 10);
        assert_eq!(first.billing_email, second.billing_email);
        assert_ne!(first.id, second.id);
        assert!(first.billing_email.starts_with("billing"));
        assert!(first.billing_email.ends_with(".acme.example"));
        assert!(!first.billing_email.contains("@acme.example"));
    }

    #[test]
    fn member_emails_are_positional() {
        let user = User::member("acme.example", 0);
        assert_eq!(user.email, "user00001@acme.example");
        assert_eq!(User::member("acme.example", 41).name, "User 42");
    }

    #[test]
    fn cipher_ownership_is_exclusive() {
        let org = Uuid::new_v4();
        let user = Uuid::new_v4();
        let shared = Cipher::organizational(org, CipherKind::Login, "Item 1");
        assert_eq!(shared.organization_id, Some(org));
        assert!(shared.user_id.is_none());

        let personal = Cipher::personal(user, CipherKind::SecureNote, "Note");
        assert!(personal.organization_id.is_none());
        assert_eq!(personal.user_id, Some(user));
    }
}
