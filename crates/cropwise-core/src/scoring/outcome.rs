use crate::catalog::schema::CropProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one scoring criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    SoilType,
    PhLevel,
    Temperature,
    Rainfall,
    SoilMoisture,
    Nutrients,
    Irrigation,
    Sunlight,
    Season,
    LandArea,
    PestResistance,
    Budget,
}

impl Criterion {
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::SoilType => "Soil type",
            Criterion::PhLevel => "pH level",
            Criterion::Temperature => "Temperature",
            Criterion::Rainfall => "Rainfall",
            Criterion::SoilMoisture => "Soil moisture",
            Criterion::Nutrients => "Soil nutrients",
            Criterion::Irrigation => "Irrigation",
            Criterion::Sunlight => "Sunlight",
            Criterion::Season => "Season",
            Criterion::LandArea => "Land area",
            Criterion::PestResistance => "Pest resistance",
            Criterion::Budget => "Budget",
        }
    }
}

/// One criterion's contribution to a crop's score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub points: Decimal,
    pub max_points: Decimal,
    /// Human-readable explanation of why the points were (not) awarded.
    pub detail: String,
}

/// Coarse suitability band derived from the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Low,
    Moderate,
    High,
}

impl Suitability {
    pub fn from_score(score: Decimal) -> Suitability {
        if score >= Decimal::from(70) {
            Suitability::High
        } else if score >= Decimal::from(40) {
            Suitability::Moderate
        } else {
            Suitability::Low
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suitability::Low => write!(f, "Low"),
            Suitability::Moderate => write!(f, "Moderate"),
            Suitability::High => write!(f, "High"),
        }
    }
}

/// A catalog crop annotated with its match score and per-criterion breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub crop: CropProfile,
    pub score: Decimal,
    pub suitability: Suitability,
    pub breakdown: Vec<CriterionScore>,
}

/// Ranked recommendation result for one catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub catalog_name: String,
    pub advanced_mode: bool,
    pub crops: Vec<ScoredCrop>,
}
