use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed numeric interval, e.g. a crop's tolerated pH span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ValueRange {
    pub fn new(min: Decimal, max: Decimal) -> ValueRange {
        ValueRange { min, max }
    }

    /// Both boundaries are inclusive.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance from `value` to the nearest boundary, zero when inside.
    pub fn distance_to(&self, value: Decimal) -> Decimal {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            Decimal::ZERO
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Moderate,
    High,
}

impl fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterRequirement::Low => write!(f, "Low"),
            WaterRequirement::Moderate => write!(f, "Moderate"),
            WaterRequirement::High => write!(f, "High"),
        }
    }
}

impl WaterRequirement {
    pub fn from_str_loose(s: &str) -> Option<WaterRequirement> {
        let lower = s.trim().to_lowercase();
        if lower.contains("high") {
            Some(WaterRequirement::High)
        } else if lower.contains("moderate") || lower.contains("medium") {
            Some(WaterRequirement::Moderate)
        } else if lower.contains("low") {
            Some(WaterRequirement::Low)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketValue {
    Low,
    Medium,
    High,
}

impl fmt::Display for MarketValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketValue::Low => write!(f, "Low"),
            MarketValue::Medium => write!(f, "Medium"),
            MarketValue::High => write!(f, "High"),
        }
    }
}

impl MarketValue {
    pub fn from_str_loose(s: &str) -> Option<MarketValue> {
        let lower = s.trim().to_lowercase();
        if lower.contains("high") {
            Some(MarketValue::High)
        } else if lower.contains("medium") || lower.contains("moderate") {
            Some(MarketValue::Medium)
        } else if lower.contains("low") {
            Some(MarketValue::Low)
        } else {
            None
        }
    }
}

/// Three-step rating used for pest resistance and drought tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResistanceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ResistanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResistanceLevel::Low => write!(f, "Low"),
            ResistanceLevel::Medium => write!(f, "Medium"),
            ResistanceLevel::High => write!(f, "High"),
        }
    }
}

impl ResistanceLevel {
    pub fn from_str_loose(s: &str) -> Option<ResistanceLevel> {
        let lower = s.trim().to_lowercase();
        if lower.contains("high") {
            Some(ResistanceLevel::High)
        } else if lower.contains("medium") || lower.contains("moderate") {
            Some(ResistanceLevel::Medium)
        } else if lower.contains("low") {
            Some(ResistanceLevel::Low)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunlightExposure {
    Full,
    Partial,
}

impl fmt::Display for SunlightExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SunlightExposure::Full => write!(f, "full"),
            SunlightExposure::Partial => write!(f, "partial"),
        }
    }
}

/// Soil nutrient readings in mg/kg. Each nutrient is independently optional:
/// a present zero reading is a real measurement, not missing data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpkReading {
    #[serde(default)]
    pub nitrogen: Option<Decimal>,
    #[serde(default)]
    pub phosphorus: Option<Decimal>,
    #[serde(default)]
    pub potassium: Option<Decimal>,
}

/// Snapshot of a farmer's current conditions, as submitted by an upstream form.
///
/// Every field is optional at this boundary because forms may submit partial
/// data. Scoring requires the four basic fields; `basic_conditions()` is the
/// gate that decides whether the profile can be scored at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmerProfile {
    #[serde(default)]
    pub soil_type: Option<String>,
    /// Soil pH, 0-14.
    #[serde(default)]
    pub ph_level: Option<Decimal>,
    /// Average temperature in degrees C.
    #[serde(default)]
    pub temperature: Option<Decimal>,
    /// Annual rainfall in mm.
    #[serde(default)]
    pub rainfall: Option<Decimal>,

    /// Soil moisture in percent (0-100).
    #[serde(default)]
    pub soil_moisture: Option<Decimal>,
    #[serde(default)]
    pub soil_npk: Option<NpkReading>,
    #[serde(default)]
    pub irrigation_available: Option<bool>,
    #[serde(default)]
    pub sunlight_exposure: Option<SunlightExposure>,
    #[serde(default)]
    pub season: Option<String>,
    /// Cultivable land in acres.
    #[serde(default)]
    pub land_area: Option<Decimal>,
    #[serde(default)]
    pub pest_resistance_preference: Option<bool>,
    /// Working budget in currency units.
    #[serde(default)]
    pub budget: Option<Decimal>,
}

/// The four always-required inputs, extracted once presence is verified.
#[derive(Debug, Clone, Copy)]
pub struct BasicConditions<'a> {
    pub soil_type: &'a str,
    pub ph_level: Decimal,
    pub temperature: Decimal,
    pub rainfall: Decimal,
}

impl FarmerProfile {
    /// Returns the basic conditions when all four required fields are present.
    /// A profile without them cannot be scored.
    pub fn basic_conditions(&self) -> Option<BasicConditions<'_>> {
        let soil_type = self.soil_type.as_deref()?;
        if soil_type.trim().is_empty() {
            return None;
        }
        Some(BasicConditions {
            soil_type,
            ph_level: self.ph_level?,
            temperature: self.temperature?,
            rainfall: self.rainfall?,
        })
    }
}
