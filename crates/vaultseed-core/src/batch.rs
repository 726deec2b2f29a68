use serde::Serialize;

use crate::entities::{
    Cipher, CipherPlacement, Collection, Folder, Group, GroupGrant, GroupMembership, Organization,
    User, UserGrant,
};

/// Append-only accumulator for everything one pipeline run creates.
///
/// Ownership of an entity transfers here the moment a step appends it, and
/// the whole set is handed to the commit collaborator as a single unit when
/// the run finishes. Nothing is mutated after that hand-off.
#[derive(Debug, Clone, Default)]
pub struct EntityBatches {
    pub organizations: Vec<Organization>,
    pub users: Vec<User>,
    pub groups: Vec<Group>,
    pub memberships: Vec<GroupMembership>,
    pub collections: Vec<Collection>,
    pub group_grants: Vec<GroupGrant>,
    pub user_grants: Vec<UserGrant>,
    pub folders: Vec<Folder>,
    pub ciphers: Vec<Cipher>,
    pub placements: Vec<CipherPlacement>,
}

impl EntityBatches {
    pub fn counts(&self) -> BatchCounts {
        BatchCounts {
            organizations: self.organizations.len(),
            users: self.users.len(),
            groups: self.groups.len(),
            memberships: self.memberships.len(),
            collections: self.collections.len(),
            group_grants: self.group_grants.len(),
            user_grants: self.user_grants.len(),
            folders: self.folders.len(),
            ciphers: self.ciphers.len(),
            placements: self.placements.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

/// Entity counts for one run, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchCounts {
    pub organizations: usize,
    pub users: usize,
    pub groups: usize,
    pub memberships: usize,
    pub collections: usize,
    pub group_grants: usize,
    pub user_grants: usize,
    pub folders: usize,
    pub ciphers: usize,
    pub placements: usize,
}

impl BatchCounts {
    pub fn total(&self) -> usize {
        self.organizations
            + self.users
            + self.groups
            + self.memberships
            + self.collections
            + self.group_grants
            + self.user_grants
            + self.folders
            + self.ciphers
            + self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn counts_track_appends() {
        let mut batches = EntityBatches::default();
        assert!(batches.is_empty());

        let org = Organization::new("Acme", "acme.example", 3);
        let group = Group::new(org.id, "Group 1");
        let user = User::member(&org.domain, 0);
        batches.memberships.push(GroupMembership {
            group_id: group.id,
            user_id: user.id,
        });
        batches.organizations.push(org);
        batches.groups.push(group);
        batches.users.push(user);
        batches.placements.push(CipherPlacement {
            cipher_id: Uuid::new_v4(),
            collection_id: Uuid::new_v4(),
        });

        let counts = batches.counts();
        assert_eq!(counts.organizations, 1);
        assert_eq!(counts.memberships, 1);
        assert_eq!(counts.placements, 1);
        assert_eq!(counts.total(), 5);
        assert!(!batches.is_empty());
    }
}
