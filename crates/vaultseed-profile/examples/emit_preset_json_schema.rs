use schemars::schema_for;
use vaultseed_profile::SeedPreset;

fn main() {
    let schema = schema_for!(SeedPreset);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
