use vaultseed_core::{Error, Result};
use vaultseed_profile::{DensityProfile, SeedPreset};

use crate::step::Step;
use crate::steps::{
    AddOwnerStep, AddPersonalCiphersStep, AddUsersStep, CreateCollectionsStep, CreateFoldersStep,
    CreateGroupsStep, CreateOrganizationStep, GenerateCiphersStep,
};

/// An ordered list of steps ready to execute against one fresh context.
pub struct Recipe {
    name: String,
    steps: Vec<Box<dyn Step>>,
}

impl Recipe {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Box<dyn Step>] {
        &self.steps
    }
}

/// Assembles a recipe in dependency order and rejects configurations that
/// could not possibly execute, before any entity exists.
pub struct RecipeBuilder {
    name: String,
    steps: Vec<Box<dyn Step>>,
    has_organization: bool,
    has_folders: bool,
    defect: Option<Error>,
}

impl RecipeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
            has_organization: false,
            has_folders: false,
            defect: None,
        }
    }

    pub fn create_organization(mut self, name: &str, domain: &str, seats: u32) -> Self {
        self.steps
            .push(Box::new(CreateOrganizationStep::new(name, domain, seats)));
        self.has_organization = true;
        self
    }

    pub fn add_owner(mut self) -> Self {
        self.require_organization_first("an owner");
        self.steps.push(Box::new(AddOwnerStep));
        self
    }

    pub fn add_users(mut self, count: usize) -> Self {
        self.require_organization_first("users");
        self.steps.push(Box::new(AddUsersStep::new(count)));
        self
    }

    pub fn add_groups(mut self, count: usize, density: Option<DensityProfile>) -> Self {
        self.require_organization_first("groups");
        self.check_density(density.as_ref());
        self.steps.push(Box::new(CreateGroupsStep::new(count, density)));
        self
    }

    pub fn add_collections(mut self, count: usize, density: Option<DensityProfile>) -> Self {
        self.require_organization_first("collections");
        self.check_density(density.as_ref());
        self.steps
            .push(Box::new(CreateCollectionsStep::new(count, density)));
        self
    }

    pub fn add_folders(mut self) -> Self {
        self.require_organization_first("folders");
        self.steps.push(Box::new(CreateFoldersStep));
        self.has_folders = true;
        self
    }

    pub fn add_ciphers(
        mut self,
        count: usize,
        assign_folders: bool,
        density: Option<DensityProfile>,
    ) -> Self {
        self.require_organization_first("ciphers");
        self.check_density(density.as_ref());
        if assign_folders && !self.has_folders {
            self.record(Error::Config(
                "cipher folder assignment requires a folders step first".to_string(),
            ));
        }
        self.steps
            .push(Box::new(GenerateCiphersStep::new(count, assign_folders, density)));
        self
    }

    pub fn add_personal_ciphers(mut self, count_per_user: usize) -> Self {
        self.require_organization_first("personal ciphers");
        self.steps
            .push(Box::new(AddPersonalCiphersStep::new(count_per_user)));
        self
    }

    /// Appends a caller-provided step. Custom steps are responsible for
    /// their own precondition checks at execute time.
    pub fn add_step(mut self, step: Box<dyn Step>) -> Self {
        self.steps.push(step);
        self
    }

    /// Finishes the recipe, surfacing the first configuration defect
    /// recorded while assembling it.
    pub fn build(self) -> Result<Recipe> {
        if let Some(defect) = self.defect {
            return Err(defect);
        }
        if !self.has_organization {
            return Err(Error::Config(format!(
                "recipe '{}' must create an organization",
                self.name
            )));
        }
        Ok(Recipe {
            name: self.name,
            steps: self.steps,
        })
    }

    fn require_organization_first(&mut self, what: &str) {
        if !self.has_organization {
            self.record(Error::Config(format!(
                "{what} requested before an organization step"
            )));
        }
    }

    fn check_density(&mut self, density: Option<&DensityProfile>) {
        if let Some(density) = density {
            if let Err(err) = density.validate() {
                self.record(Error::Config(err.to_string()));
            }
        }
    }

    fn record(&mut self, error: Error) {
        if self.defect.is_none() {
            self.defect = Some(error);
        }
    }
}

/// Resolves a JSON preset into a recipe, following the same resolution
/// order the builder enforces: organization, owner, users, groups,
/// collections, folders, ciphers, personal ciphers.
pub fn recipe_from_preset(name: &str, preset: &SeedPreset) -> Result<Recipe> {
    let organization = preset
        .organization
        .as_ref()
        .ok_or_else(|| Error::Config(format!("preset '{name}' must specify an organization")))?;

    let density = preset
        .density_profile()
        .map_err(|err| Error::Config(err.to_string()))?;

    let seats = organization.seats.unwrap_or_else(|| {
        preset
            .users
            .map(|users| users.count as u32 + 1)
            .unwrap_or(1)
    });

    let mut builder = RecipeBuilder::new(name)
        .create_organization(&organization.name, &organization.domain, seats)
        .add_owner();

    if let Some(users) = &preset.users {
        builder = builder.add_users(users.count);
    }
    if let Some(groups) = &preset.groups {
        builder = builder.add_groups(groups.count, density.clone());
    }
    if let Some(collections) = &preset.collections {
        builder = builder.add_collections(collections.count, density.clone());
    }
    if preset.folders {
        builder = builder.add_folders();
    }
    if let Some(ciphers) = &preset.ciphers {
        if ciphers.count > 0 {
            builder = builder.add_ciphers(ciphers.count, ciphers.assign_folders, density);
        }
    }
    if let Some(personal) = &preset.personal_ciphers {
        if personal.count_per_user > 0 {
            builder = builder.add_personal_ciphers(personal.count_per_user);
        }
    }

    builder.build()
}
