mod ciphers;
mod collections;
mod folders;
mod groups;
mod organization;
mod personal;
mod users;

pub use ciphers::{GenerateCiphersStep, placement_index};
pub use collections::{
    CreateCollectionsStep, apply_group_permissions, apply_user_permissions, build_group_grants,
    build_user_grants, fan_out,
};
pub use folders::CreateFoldersStep;
pub use groups::{CreateGroupsStep, users_per_group};
pub use organization::CreateOrganizationStep;
pub use personal::AddPersonalCiphersStep;
pub use users::{AddOwnerStep, AddUsersStep};
