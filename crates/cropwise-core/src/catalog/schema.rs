use crate::model::{MarketValue, ResistanceLevel, ValueRange, WaterRequirement};
use serde::{Deserialize, Serialize};

/// A catalog of crop profiles to score against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropCatalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub crops: Vec<CropProfile>,
}

/// Environmental envelope and resource needs of one crop. Read-only catalog
/// data; all ranges are closed intervals (degrees C, mm, pH 0-14).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub id: u32,
    pub name: String,
    /// Accepted soil category labels, normalized lowercase.
    pub soil_types: Vec<String>,
    pub ph_range: ValueRange,
    pub temperature_range: ValueRange,
    pub rainfall_range: ValueRange,
    pub water_requirement: WaterRequirement,
    pub season: String,
    /// Fertilizer descriptor, e.g. "Nitrogen-rich fertilizer (NPK 12-6-6)".
    pub fertilizer: String,
    /// Days from sowing to harvest.
    #[serde(default)]
    pub growth_days: Option<u32>,
    pub market_value: MarketValue,
    pub pest_resistance: ResistanceLevel,
    #[serde(default)]
    pub drought_tolerance: Option<ResistanceLevel>,
    /// Free-text handling notes; may encode shade tolerance.
    #[serde(default)]
    pub notes: String,
}

impl CropProfile {
    pub fn accepts_soil(&self, normalized_label: &str) -> bool {
        self.soil_types.iter().any(|s| s == normalized_label)
    }
}
