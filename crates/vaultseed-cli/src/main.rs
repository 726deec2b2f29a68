mod commit;
mod registry;

use std::fs::File;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use uuid::Uuid;

use commit::CsvCommitter;
use registry::{RunContext, init_run_logging, start_run, write_summary};
use vaultseed_core::Error as CoreError;
use vaultseed_pipeline::{Recipe, RecipeBuilder, RecipeExecutor, recipe_from_preset};
use vaultseed_profile::{DensityProfile, ProfileError, SeedPreset};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("pipeline error: {0}")]
    Core(#[from] CoreError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

#[derive(Parser, Debug)]
#[command(name = "vaultseed", version, about = "Deterministic organization vault seeder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed an organization vault and write the batches as run artifacts.
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Organization name.
    #[arg(short = 'n', long)]
    name: Option<String>,
    /// Email domain for seeded accounts (must end in .example, RFC 2606).
    #[arg(short = 'd', long)]
    domain: Option<String>,
    /// Number of users to generate (minimum 1).
    #[arg(short = 'u', long, default_value_t = 0)]
    users: usize,
    /// Number of groups to create (default: no groups).
    #[arg(short = 'g', long, default_value_t = 0)]
    groups: usize,
    /// Number of collections to create.
    #[arg(long, default_value_t = 0)]
    collections: usize,
    /// Number of organization ciphers to generate (default: no vault data).
    #[arg(short = 'c', long, default_value_t = 0)]
    ciphers: usize,
    /// Create one folder per user and file ciphers into them.
    #[arg(long, default_value_t = false)]
    folders: bool,
    /// Personal ciphers per user, outside the organization vault.
    #[arg(long, default_value_t = 0)]
    personal_ciphers: usize,
    /// JSON preset file; replaces the individual flags above.
    #[arg(long, conflicts_with_all = ["name", "domain"])]
    preset: Option<PathBuf>,
    /// Output directory for runs.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Seed(args) => run_seed(args),
    }
}

fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let (recipe, density) = build_recipe(&args)?;

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        recipe: recipe.name().to_string(),
        run_dir: args.run_dir.clone(),
        density,
    };
    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_id, recipe = %run_ctx.recipe);

    let mut executor = RecipeExecutor::new(CsvCommitter::new(run_paths.run_root.clone()));
    let summary = executor.execute(&recipe)?;

    write_summary(&run_paths, &summary)?;
    tracing::info!(
        event = "run_finished",
        status = "success",
        organization_id = %summary.organization_id
    );

    println!("organization {}", summary.organization_id);
    if let Some(owner) = &summary.owner_email {
        println!("owner {owner}");
    }
    println!(
        "users {}  groups {}  collections {}  ciphers {}",
        summary.counts.users, summary.counts.groups, summary.counts.collections, summary.counts.ciphers
    );
    println!("artifacts {}", run_paths.run_root.display());

    Ok(())
}

fn build_recipe(args: &SeedArgs) -> Result<(Recipe, Option<DensityProfile>), CliError> {
    if let Some(path) = &args.preset {
        let file = File::open(path)?;
        let preset: SeedPreset = serde_json::from_reader(file)?;
        let density = preset.density_profile()?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("preset")
            .to_string();
        let recipe = recipe_from_preset(&name, &preset)?;
        return Ok((recipe, density));
    }

    let name = args
        .name
        .clone()
        .ok_or_else(|| CliError::InvalidArgs("--name is required without --preset".to_string()))?;
    let domain = args
        .domain
        .clone()
        .ok_or_else(|| CliError::InvalidArgs("--domain is required without --preset".to_string()))?;
    if !domain.to_lowercase().ends_with(".example") {
        return Err(CliError::InvalidArgs(
            "domain must end with '.example' (RFC 2606), e.g. myorg.example".to_string(),
        ));
    }
    if args.users < 1 {
        return Err(CliError::InvalidArgs("at least one user is required".to_string()));
    }

    let mut builder = RecipeBuilder::new("from-args")
        .create_organization(&name, &domain, args.users as u32 + 1)
        .add_owner()
        .add_users(args.users);

    if args.groups > 0 {
        builder = builder.add_groups(args.groups, None);
    }
    if args.collections > 0 {
        builder = builder.add_collections(args.collections, None);
    } else if args.ciphers > 0 {
        builder = builder.add_collections(1, None);
    }
    if args.folders {
        builder = builder.add_folders();
    }
    if args.ciphers > 0 {
        builder = builder.add_ciphers(args.ciphers, args.folders, None);
    }
    if args.personal_ciphers > 0 {
        builder = builder.add_personal_ciphers(args.personal_ciphers);
    }

    Ok((builder.build()?, None))
}
