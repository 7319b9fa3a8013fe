pub mod builtin;
pub mod normalize;
pub mod schema;

use crate::error::CropwiseError;
use rust_decimal::Decimal;
use schema::CropCatalog;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Raw catalog file: header fields are strict, crop records stay loose until
/// the normalization adapter has resolved their shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    name: String,
    #[serde(default)]
    description: Option<String>,
    version: String,
    crops: Vec<Value>,
}

/// Load a crop catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<CropCatalog, CropwiseError> {
    let content = std::fs::read_to_string(path).map_err(|e| CropwiseError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a crop catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<CropCatalog, CropwiseError> {
    parse_catalog_str(json).map_err(|e| CropwiseError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse a crop catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<CropCatalog, CropwiseError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let mut crops = Vec::with_capacity(file.crops.len());
    for (position, record) in file.crops.iter().enumerate() {
        crops.push(normalize::crop_from_value(record, position)?);
    }

    let catalog = CropCatalog {
        name: file.name,
        description: file.description,
        version: file.version,
        crops,
    };
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &CropCatalog) -> Result<(), CropwiseError> {
    if catalog.name.trim().is_empty() {
        return Err(CropwiseError::CatalogInvalid(
            "catalog name must not be empty".into(),
        ));
    }

    if catalog.crops.is_empty() {
        return Err(CropwiseError::CatalogInvalid(
            "crops must not be empty".into(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for crop in &catalog.crops {
        if crop.name.trim().is_empty() {
            return Err(CropwiseError::CatalogInvalid(
                "crop name must not be empty".into(),
            ));
        }

        if !seen_ids.insert(crop.id) {
            return Err(CropwiseError::CatalogInvalid(format!(
                "duplicate crop id {} ('{}')",
                crop.id, crop.name
            )));
        }

        if crop.soil_types.is_empty() {
            return Err(CropwiseError::CatalogInvalid(format!(
                "crop '{}' has no soil types",
                crop.name
            )));
        }

        for (what, range) in [
            ("pH", &crop.ph_range),
            ("temperature", &crop.temperature_range),
            ("rainfall", &crop.rainfall_range),
        ] {
            if !range.is_well_formed() {
                return Err(CropwiseError::CatalogInvalid(format!(
                    "crop '{}' has an inverted {} range ({})",
                    crop.name, what, range
                )));
            }
        }

        if crop.ph_range.min < Decimal::ZERO || crop.ph_range.max > Decimal::from(14) {
            return Err(CropwiseError::CatalogInvalid(format!(
                "crop '{}' has a pH range outside 0-14 ({})",
                crop.name, crop.ph_range
            )));
        }
    }

    Ok(())
}
