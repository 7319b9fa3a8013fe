//! Shape normalization for crop records.
//!
//! Catalog data reaches us from several sources that spell the same attribute
//! differently: canonical `ph_range: {min, max}`, flat `min_ph`/`max_ph` (or
//! camelCase `minPh`/`maxPh`), values nested under a `details` object, and
//! numbers that may be bare or quoted strings. Everything is resolved here,
//! BEFORE a `CropProfile` is constructed, so the core model stays strict and
//! single-shaped.

use crate::catalog::schema::CropProfile;
use crate::error::CropwiseError;
use crate::model::{MarketValue, ResistanceLevel, ValueRange, WaterRequirement};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Normalize a soil category label to a canonical key.
///
/// Steps:
/// 1. Lowercase and trim
/// 2. Collapse separators (hyphens, underscores, slashes) to single spaces
/// 3. Look up in alias map
pub fn normalize_soil_label(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    let mut collapsed = String::with_capacity(lower.len());
    let mut prev_space = true; // start true to skip leading separators
    for c in lower.chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                collapsed.push(c);
                prev_space = false;
            }
            _ => {
                if !prev_space {
                    collapsed.push(' ');
                }
                prev_space = true;
            }
        }
    }
    if collapsed.ends_with(' ') {
        collapsed.pop();
    }

    match SOIL_ALIASES.get(collapsed.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => collapsed,
    }
}

static SOIL_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("clayey", "clay");
    m.insert("clay soil", "clay");
    m.insert("heavy clay", "clay");
    m.insert("loamy", "loam");
    m.insert("loam soil", "loam");
    m.insert("silty", "silt");
    m.insert("silt loam", "silt");
    m.insert("sandy soil", "sandy");
    m.insert("sand", "sandy");
    m.insert("loamy sand", "sandy loam");
    m.insert("sandy loam soil", "sandy loam");
    m.insert("clayey loam", "clay loam");

    m
});

/// Build a `CropProfile` from a loosely-shaped JSON record.
///
/// `position` is the zero-based index within the catalog, used for error
/// context and as the fallback id.
pub fn crop_from_value(value: &Value, position: usize) -> Result<CropProfile, CropwiseError> {
    let obj = value.as_object().ok_or_else(|| {
        CropwiseError::CropInvalid(format!("record #{} is not an object", position + 1))
    })?;

    let name = lookup(obj, &["name"])
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            CropwiseError::CropInvalid(format!("record #{} has no name", position + 1))
        })?
        .to_string();

    let id = lookup(obj, &["id"])
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .unwrap_or((position + 1) as u32);

    let soil_types = soil_types_field(obj, &name)?;

    let ph_range = range_field(
        obj,
        &name,
        "pH",
        &["ph_range", "phRange", "ph"],
        &["min_ph", "minPh"],
        &["max_ph", "maxPh"],
    )?;
    let temperature_range = range_field(
        obj,
        &name,
        "temperature",
        &["temperature_range", "temperatureRange", "temperature"],
        &["min_temp", "minTemp", "min_temperature"],
        &["max_temp", "maxTemp", "max_temperature"],
    )?;
    let rainfall_range = range_field(
        obj,
        &name,
        "rainfall",
        &["rainfall_range", "rainfallRange", "rainfall"],
        &["min_rainfall", "minRainfall"],
        &["max_rainfall", "maxRainfall"],
    )?;

    let water_requirement = lookup(obj, &["water_requirement", "waterRequirement"])
        .and_then(Value::as_str)
        .and_then(WaterRequirement::from_str_loose)
        .ok_or_else(|| {
            CropwiseError::CropInvalid(format!("crop '{}' has no water requirement", name))
        })?;

    let market_value = lookup(obj, &["market_value", "marketValue"])
        .and_then(Value::as_str)
        .and_then(MarketValue::from_str_loose)
        .ok_or_else(|| {
            CropwiseError::CropInvalid(format!("crop '{}' has no market value", name))
        })?;

    let pest_resistance = lookup(obj, &["pest_resistance", "pestResistance"])
        .and_then(Value::as_str)
        .and_then(ResistanceLevel::from_str_loose)
        .ok_or_else(|| {
            CropwiseError::CropInvalid(format!("crop '{}' has no pest resistance rating", name))
        })?;

    let drought_tolerance = lookup(obj, &["drought_tolerance", "droughtTolerance"])
        .and_then(Value::as_str)
        .and_then(ResistanceLevel::from_str_loose);

    let season = lookup(obj, &["season", "growing_season", "growingSeason"])
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CropwiseError::CropInvalid(format!("crop '{}' has no season", name)))?
        .to_string();

    let fertilizer = lookup(obj, &["fertilizer", "fertilizer_profile", "fertilizerProfile"])
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let growth_days = lookup(obj, &["growth_days", "growthDays"])
        .and_then(Value::as_u64)
        .map(|v| v as u32);

    let notes = lookup(obj, &["notes"])
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    Ok(CropProfile {
        id,
        name,
        soil_types,
        ph_range,
        temperature_range,
        rainfall_range,
        water_requirement,
        season,
        fertilizer,
        growth_days,
        market_value,
        pest_resistance,
        drought_tolerance,
        notes,
    })
}

/// Find the first present key, falling back to the same keys under `details`.
fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    for key in keys {
        if let Some(v) = obj.get(*key) {
            return Some(v);
        }
    }
    if let Some(details) = obj.get("details").and_then(Value::as_object) {
        for key in keys {
            if let Some(v) = details.get(*key) {
                return Some(v);
            }
        }
    }
    None
}

/// Parse a decimal that may be a bare JSON number or a quoted string.
fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

fn soil_types_field(
    obj: &Map<String, Value>,
    crop_name: &str,
) -> Result<Vec<String>, CropwiseError> {
    let raw = lookup(obj, &["soil_types", "soilTypes"])
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CropwiseError::CropInvalid(format!("crop '{}' has no soil type list", crop_name))
        })?;

    let mut labels = Vec::with_capacity(raw.len());
    for entry in raw {
        let label = entry.as_str().ok_or_else(|| {
            CropwiseError::CropInvalid(format!(
                "crop '{}' has a non-string soil type entry",
                crop_name
            ))
        })?;
        let normalized = normalize_soil_label(label);
        if !normalized.is_empty() && !labels.contains(&normalized) {
            labels.push(normalized);
        }
    }
    Ok(labels)
}

/// Resolve a (min, max) range from either a nested `{min, max}` object or a
/// pair of flat fields.
fn range_field(
    obj: &Map<String, Value>,
    crop_name: &str,
    what: &str,
    nested_keys: &[&str],
    min_keys: &[&str],
    max_keys: &[&str],
) -> Result<ValueRange, CropwiseError> {
    if let Some(nested) = lookup(obj, nested_keys).and_then(Value::as_object) {
        let min = nested.get("min").and_then(decimal_value);
        let max = nested.get("max").and_then(decimal_value);
        if let (Some(min), Some(max)) = (min, max) {
            return Ok(ValueRange::new(min, max));
        }
    }

    let min = lookup(obj, min_keys).and_then(decimal_value);
    let max = lookup(obj, max_keys).and_then(decimal_value);
    if let (Some(min), Some(max)) = (min, max) {
        return Ok(ValueRange::new(min, max));
    }

    Err(CropwiseError::CropInvalid(format!(
        "crop '{}' has no usable {} range",
        crop_name, what
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_soil_label_simple() {
        assert_eq!(normalize_soil_label("Clay"), "clay");
    }

    #[test]
    fn test_soil_label_separators() {
        assert_eq!(normalize_soil_label("Sandy-Loam"), "sandy loam");
        assert_eq!(normalize_soil_label("sandy_loam"), "sandy loam");
        assert_eq!(normalize_soil_label("  Clay  Loam "), "clay loam");
    }

    #[test]
    fn test_soil_label_aliases() {
        assert_eq!(normalize_soil_label("Clayey"), "clay");
        assert_eq!(normalize_soil_label("Loamy Sand"), "sandy loam");
        assert_eq!(normalize_soil_label("sand"), "sandy");
    }

    #[test]
    fn test_soil_label_unknown_passthrough() {
        assert_eq!(normalize_soil_label("Red Laterite"), "red laterite");
    }

    fn canonical_record() -> Value {
        json!({
            "id": 3,
            "name": "Corn",
            "soil_types": ["loam", "silt"],
            "ph_range": { "min": "5.8", "max": "7.0" },
            "temperature_range": { "min": "18", "max": "32" },
            "rainfall_range": { "min": "500", "max": "800" },
            "water_requirement": "moderate",
            "season": "Spring-Summer",
            "fertilizer": "NPK 10-20-20",
            "growth_days": 80,
            "market_value": "medium",
            "pest_resistance": "medium",
            "notes": "Sensitive to frost."
        })
    }

    fn flat_camel_record() -> Value {
        json!({
            "id": 3,
            "name": "Corn",
            "soilTypes": ["Loam", "Silt"],
            "minPh": 5.8,
            "maxPh": 7.0,
            "minTemp": 18,
            "maxTemp": 32,
            "minRainfall": 500,
            "maxRainfall": 800,
            "waterRequirement": "Moderate",
            "growingSeason": "Spring-Summer",
            "fertilizer": "NPK 10-20-20",
            "growthDays": 80,
            "marketValue": "Medium",
            "pestResistance": "Medium",
            "notes": "Sensitive to frost."
        })
    }

    #[test]
    fn test_canonical_record_parses() {
        let crop = crop_from_value(&canonical_record(), 0).unwrap();
        assert_eq!(crop.id, 3);
        assert_eq!(crop.name, "Corn");
        assert_eq!(crop.ph_range, ValueRange::new(dec!(5.8), dec!(7.0)));
        assert_eq!(crop.growth_days, Some(80));
    }

    #[test]
    fn test_flat_camel_record_matches_canonical() {
        let a = crop_from_value(&canonical_record(), 0).unwrap();
        let b = crop_from_value(&flat_camel_record(), 0).unwrap();
        assert_eq!(a.name, b.name);
        assert_eq!(a.soil_types, b.soil_types);
        assert_eq!(a.ph_range, b.ph_range);
        assert_eq!(a.temperature_range, b.temperature_range);
        assert_eq!(a.rainfall_range, b.rainfall_range);
        assert_eq!(a.water_requirement, b.water_requirement);
        assert_eq!(a.season, b.season);
    }

    #[test]
    fn test_details_nested_fields() {
        let record = json!({
            "name": "Turmeric",
            "soil_types": ["loam"],
            "ph_range": { "min": "5.5", "max": "7.5" },
            "rainfall_range": { "min": "1000", "max": "2000" },
            "water_requirement": "high",
            "market_value": "high",
            "pest_resistance": "high",
            "details": {
                "temperature": { "min": "20", "max": "30" },
                "season": "Summer"
            }
        });
        let crop = crop_from_value(&record, 0).unwrap();
        assert_eq!(crop.temperature_range, ValueRange::new(dec!(20), dec!(30)));
        assert_eq!(crop.season, "Summer");
    }

    #[test]
    fn test_missing_id_defaults_to_position() {
        let mut record = canonical_record();
        record.as_object_mut().unwrap().remove("id");
        let crop = crop_from_value(&record, 4).unwrap();
        assert_eq!(crop.id, 5);
    }

    #[test]
    fn test_missing_range_rejected() {
        let mut record = canonical_record();
        record.as_object_mut().unwrap().remove("rainfall_range");
        let err = crop_from_value(&record, 0).unwrap_err();
        assert!(err.to_string().contains("rainfall"));
    }

    #[test]
    fn test_missing_name_rejected() {
        let record = json!({ "soil_types": ["loam"] });
        assert!(crop_from_value(&record, 0).is_err());
    }

    #[test]
    fn test_soil_types_normalized_and_deduped() {
        let record = json!({
            "id": 1,
            "name": "Test",
            "soil_types": ["Sandy-Loam", "sandy loam", "Clay"],
            "ph_range": { "min": "5", "max": "7" },
            "temperature_range": { "min": "10", "max": "30" },
            "rainfall_range": { "min": "400", "max": "900" },
            "water_requirement": "low",
            "season": "Winter",
            "market_value": "low",
            "pest_resistance": "low"
        });
        let crop = crop_from_value(&record, 0).unwrap();
        assert_eq!(crop.soil_types, vec!["sandy loam", "clay"]);
    }
}
