use crate::catalog::schema::CropCatalog;
use crate::error::CropwiseError;

const STANDARD_CROPS_JSON: &str = include_str!("../../../../data/crops.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["standard"];

/// Load a predefined catalog by name.
pub fn load_preset(name: &str) -> Result<CropCatalog, CropwiseError> {
    match name {
        "standard" => crate::catalog::parse_catalog_str(STANDARD_CROPS_JSON),
        _ => Err(CropwiseError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
