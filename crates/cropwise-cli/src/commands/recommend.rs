use cropwise_core::catalog::builtin;
use cropwise_core::catalog::schema::CropCatalog;
use cropwise_core::error::CropwiseError;
use cropwise_core::model::FarmerProfile;
use cropwise_core::scoring::{RecommendOptions, Recommendation};
use std::path::PathBuf;

use crate::output;

pub fn run(
    profile_file: PathBuf,
    catalog_files: Vec<PathBuf>,
    presets: Vec<String>,
    advanced: bool,
    top: usize,
    output_format: &str,
    verbose: bool,
) -> Result<(), CropwiseError> {
    // Load catalogs, defaulting to the builtin preset when none are given.
    let mut catalogs: Vec<CropCatalog> = Vec::new();

    let effective_presets = if presets.is_empty() && catalog_files.is_empty() {
        builtin::PRESETS.iter().map(|s| s.to_string()).collect()
    } else {
        presets
    };

    for preset in &effective_presets {
        catalogs.push(builtin::load_preset(preset)?);
    }
    for path in &catalog_files {
        catalogs.push(cropwise_core::catalog::load_catalog(path)?);
    }

    // Load the farmer profile
    let profile_bytes = std::fs::read(&profile_file)?;
    let farmer: FarmerProfile = serde_json::from_slice(&profile_bytes)?;

    let options = RecommendOptions {
        advanced,
        top_n: top,
    };

    let results: Vec<Recommendation> = catalogs
        .iter()
        .map(|catalog| cropwise_core::recommend(&farmer, catalog, &options))
        .collect();

    match output_format {
        "json" => output::json::print_recommendations(&results)?,
        _ => output::table::print_recommendations(&results, &farmer, verbose),
    }

    Ok(())
}
