use crate::catalog::normalize::normalize_soil_label;
use crate::catalog::schema::{CropCatalog, CropProfile};
use crate::model::{
    BasicConditions, FarmerProfile, MarketValue, ResistanceLevel, SunlightExposure,
    WaterRequirement,
};
use crate::scoring::outcome::{Criterion, CriterionScore, ScoredCrop, Suitability};
use rust_decimal::Decimal;

/// Options controlling a recommendation run.
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    /// Evaluate the advanced criteria (moisture, nutrients, irrigation, ...).
    pub advanced: bool,
    /// Maximum number of crops to return.
    pub top_n: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        RecommendOptions {
            advanced: false,
            top_n: 5,
        }
    }
}

/// Score every crop in the catalog and return the ranked matches.
///
/// Crops that satisfy no criterion (score 0) are excluded. The sort is
/// stable and descending, so tied crops keep their catalog order. Returns
/// an empty list when any required farmer field is missing; callers are
/// expected to validate beforehand, but the ranker stays defensive.
pub fn rank(
    farmer: &FarmerProfile,
    catalog: &CropCatalog,
    options: &RecommendOptions,
) -> Vec<ScoredCrop> {
    let Some(basic) = farmer.basic_conditions() else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredCrop> = catalog
        .crops
        .iter()
        .map(|crop| score_against(&basic, farmer, crop, options.advanced))
        .filter(|entry| entry.score > Decimal::ZERO)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(options.top_n);
    scored
}

/// Score a single (farmer, crop) pair.
///
/// Returns `None` when a required farmer field is missing: an unscoreable
/// profile must never produce a score.
pub fn score_crop(
    farmer: &FarmerProfile,
    crop: &CropProfile,
    advanced: bool,
) -> Option<ScoredCrop> {
    let basic = farmer.basic_conditions()?;
    Some(score_against(&basic, farmer, crop, advanced))
}

/// Fixed 100-point budget: the four basic criteria carry 50 points, the
/// advanced tier the other 50. Advanced sub-criteria with missing input
/// contribute zero; nothing is renormalized.
fn score_against(
    basic: &BasicConditions<'_>,
    farmer: &FarmerProfile,
    crop: &CropProfile,
    advanced: bool,
) -> ScoredCrop {
    let mut breakdown = vec![
        score_soil(basic, crop),
        score_ph(basic, crop),
        score_temperature(basic, crop),
        score_rainfall(basic, crop),
    ];

    if advanced {
        breakdown.push(score_moisture(farmer, crop));
        breakdown.push(score_nutrients(farmer, crop));
        breakdown.push(score_irrigation(farmer, crop));
        breakdown.push(score_sunlight(farmer, crop));
        breakdown.push(score_season(farmer, crop));
        breakdown.push(score_land_area(farmer));
        breakdown.push(score_pest_resistance(farmer, crop));
        breakdown.push(score_budget(farmer, crop));
    }

    let score: Decimal = breakdown.iter().map(|c| c.points).sum();

    ScoredCrop {
        crop: crop.clone(),
        score,
        suitability: Suitability::from_score(score),
        breakdown,
    }
}

fn entry(criterion: Criterion, points: Decimal, max: i32, detail: String) -> CriterionScore {
    CriterionScore {
        criterion,
        points,
        max_points: Decimal::from(max),
        detail,
    }
}

/// Soil type: binary 15 points, no partial credit.
fn score_soil(basic: &BasicConditions<'_>, crop: &CropProfile) -> CriterionScore {
    let label = normalize_soil_label(basic.soil_type);
    let accepted = crop.accepts_soil(&label);
    let points = if accepted {
        Decimal::from(15)
    } else {
        Decimal::ZERO
    };
    let detail = if accepted {
        format!("soil type '{}' accepted", label)
    } else {
        format!(
            "soil type '{}' not among: {}",
            label,
            crop.soil_types.join(", ")
        )
    };
    entry(Criterion::SoilType, points, 15, detail)
}

/// pH: 15 points inside the range, linear decay of 2 points per pH unit outside.
fn score_ph(basic: &BasicConditions<'_>, crop: &CropProfile) -> CriterionScore {
    let range = &crop.ph_range;
    if range.contains(basic.ph_level) {
        let detail = format!("pH {} within {}", basic.ph_level, range);
        return entry(Criterion::PhLevel, Decimal::from(15), 15, detail);
    }
    let distance = range.distance_to(basic.ph_level);
    let points = (Decimal::from(15) - Decimal::from(2) * distance).max(Decimal::ZERO);
    let detail = format!("pH {} is {} outside {}", basic.ph_level, distance, range);
    entry(Criterion::PhLevel, points, 15, detail)
}

/// Temperature: 10 points inside the range, decay of 1 point per degree C outside.
fn score_temperature(basic: &BasicConditions<'_>, crop: &CropProfile) -> CriterionScore {
    let range = &crop.temperature_range;
    if range.contains(basic.temperature) {
        let detail = format!("temperature {} C within {}", basic.temperature, range);
        return entry(Criterion::Temperature, Decimal::from(10), 10, detail);
    }
    let distance = range.distance_to(basic.temperature);
    let points = (Decimal::from(10) - distance).max(Decimal::ZERO);
    let detail = format!(
        "temperature {} C is {} outside {}",
        basic.temperature, distance, range
    );
    entry(Criterion::Temperature, points, 10, detail)
}

/// Rainfall: 10 points inside the range, decay of 1 point per 100 mm outside.
fn score_rainfall(basic: &BasicConditions<'_>, crop: &CropProfile) -> CriterionScore {
    let range = &crop.rainfall_range;
    if range.contains(basic.rainfall) {
        let detail = format!("rainfall {} mm within {}", basic.rainfall, range);
        return entry(Criterion::Rainfall, Decimal::from(10), 10, detail);
    }
    let distance = range.distance_to(basic.rainfall);
    let points = (Decimal::from(10) - distance / Decimal::from(100)).max(Decimal::ZERO);
    let detail = format!(
        "rainfall {} mm is {} mm outside {}",
        basic.rainfall, distance, range
    );
    entry(Criterion::Rainfall, points, 10, detail)
}

/// Soil moisture: 10 points when the reading clears the crop's
/// requirement-specific threshold (High 70, Moderate 50, Low 30).
fn score_moisture(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let Some(moisture) = farmer.soil_moisture else {
        return entry(
            Criterion::SoilMoisture,
            Decimal::ZERO,
            10,
            "no soil moisture reading".into(),
        );
    };

    let threshold = match crop.water_requirement {
        WaterRequirement::High => Decimal::from(70),
        WaterRequirement::Moderate => Decimal::from(50),
        WaterRequirement::Low => Decimal::from(30),
    };

    if moisture >= threshold {
        let detail = format!(
            "moisture {}% meets the {} water requirement (threshold {}%)",
            moisture, crop.water_requirement, threshold
        );
        entry(Criterion::SoilMoisture, Decimal::from(10), 10, detail)
    } else {
        let detail = format!(
            "moisture {}% below the {} water requirement threshold {}%",
            moisture, crop.water_requirement, threshold
        );
        entry(Criterion::SoilMoisture, Decimal::ZERO, 10, detail)
    }
}

/// True when the fertilizer descriptor textually signals an emphasis on the
/// nutrient, e.g. "Nitrogen-rich fertilizer (NPK 12-6-6)".
fn emphasizes(descriptor: &str, nutrient: &str) -> bool {
    descriptor
        .to_lowercase()
        .contains(&format!("{}-rich", nutrient))
}

/// Nutrients: up to 10 points (nitrogen 3, phosphorus 3, potassium 4). Each
/// nutrient is gated on its own reading being present and at least 15, and on
/// the crop's fertilizer descriptor emphasizing it.
fn score_nutrients(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let Some(npk) = farmer.soil_npk.as_ref() else {
        return entry(
            Criterion::Nutrients,
            Decimal::ZERO,
            10,
            "no soil nutrient readings".into(),
        );
    };

    let floor = Decimal::from(15);
    let mut points = Decimal::ZERO;
    let mut awarded = Vec::new();

    for (nutrient, reading, value) in [
        ("nitrogen", npk.nitrogen, 3),
        ("phosphorus", npk.phosphorus, 3),
        ("potassium", npk.potassium, 4),
    ] {
        if !emphasizes(&crop.fertilizer, nutrient) {
            continue;
        }
        if let Some(reading) = reading {
            if reading >= floor {
                points += Decimal::from(value);
                awarded.push(nutrient);
            }
        }
    }

    let detail = if awarded.is_empty() {
        "no emphasized nutrient at a sufficient level".to_string()
    } else {
        format!("emphasized nutrients at sufficient levels: {}", awarded.join(", "))
    };
    entry(Criterion::Nutrients, points, 10, detail)
}

/// Irrigation: 5 points when available and the crop's water requirement is High.
fn score_irrigation(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let available = farmer.irrigation_available.unwrap_or(false);
    if available && crop.water_requirement == WaterRequirement::High {
        return entry(
            Criterion::Irrigation,
            Decimal::from(5),
            5,
            "irrigation available for a High water requirement crop".into(),
        );
    }
    let detail = if available {
        format!(
            "irrigation available but water requirement is {}",
            crop.water_requirement
        )
    } else {
        "no irrigation available".to_string()
    };
    entry(Criterion::Irrigation, Decimal::ZERO, 5, detail)
}

/// Sunlight: full sun matches crops whose notes do not ask for partial shade;
/// partial sun matches crops whose notes mention partial-shade tolerance.
fn score_sunlight(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let Some(exposure) = farmer.sunlight_exposure else {
        return entry(
            Criterion::Sunlight,
            Decimal::ZERO,
            5,
            "no sunlight exposure given".into(),
        );
    };

    let shade_tolerant = crop.notes.to_lowercase().contains("partial shade");
    let matched = match exposure {
        SunlightExposure::Full => !shade_tolerant,
        SunlightExposure::Partial => shade_tolerant,
    };

    let points = if matched {
        Decimal::from(5)
    } else {
        Decimal::ZERO
    };
    let detail = if matched {
        format!("{} sun exposure suits this crop", exposure)
    } else {
        format!("{} sun exposure does not suit this crop", exposure)
    };
    entry(Criterion::Sunlight, points, 5, detail)
}

/// Season: 5 points on a case-insensitive substring match in either direction.
fn score_season(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let Some(season) = farmer.season.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return entry(
            Criterion::Season,
            Decimal::ZERO,
            5,
            "no season selected".into(),
        );
    };

    let wanted = season.to_lowercase();
    let label = crop.season.to_lowercase();
    if label.contains(&wanted) || wanted.contains(&label) {
        let detail = format!("season '{}' matches '{}'", season, crop.season);
        entry(Criterion::Season, Decimal::from(5), 5, detail)
    } else {
        let detail = format!("season '{}' does not match '{}'", season, crop.season);
        entry(Criterion::Season, Decimal::ZERO, 5, detail)
    }
}

/// Land area: coarse viability gate at 1 acre, not a scaling factor.
fn score_land_area(farmer: &FarmerProfile) -> CriterionScore {
    let Some(area) = farmer.land_area else {
        return entry(
            Criterion::LandArea,
            Decimal::ZERO,
            5,
            "no land area given".into(),
        );
    };

    if area >= Decimal::ONE {
        let detail = format!("{} acres is a viable plot", area);
        entry(Criterion::LandArea, Decimal::from(5), 5, detail)
    } else {
        let detail = format!("{} acres is below the viable minimum of 1", area);
        entry(Criterion::LandArea, Decimal::ZERO, 5, detail)
    }
}

/// Pest resistance: 5 points when requested and the crop's resistance is High.
fn score_pest_resistance(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let requested = farmer.pest_resistance_preference.unwrap_or(false);
    if requested && crop.pest_resistance == ResistanceLevel::High {
        return entry(
            Criterion::PestResistance,
            Decimal::from(5),
            5,
            "high pest resistance as requested".into(),
        );
    }
    let detail = if requested {
        format!("pest resistance is {}", crop.pest_resistance)
    } else {
        "pest resistance not requested".to_string()
    };
    entry(Criterion::PestResistance, Decimal::ZERO, 5, detail)
}

/// Budget: two-tier step function, not continuous. High market value crops
/// need a budget of at least 50 000, Medium at least 25 000.
fn score_budget(farmer: &FarmerProfile, crop: &CropProfile) -> CriterionScore {
    let Some(budget) = farmer.budget else {
        return entry(Criterion::Budget, Decimal::ZERO, 5, "no budget given".into());
    };

    let matched = match crop.market_value {
        MarketValue::High => budget >= Decimal::from(50_000),
        MarketValue::Medium => budget >= Decimal::from(25_000),
        MarketValue::Low => false,
    };

    if matched {
        let detail = format!(
            "budget {} covers a {} market value crop",
            budget, crop.market_value
        );
        entry(Criterion::Budget, Decimal::from(5), 5, detail)
    } else {
        let detail = format!(
            "budget {} below the tier for {} market value",
            budget, crop.market_value
        );
        entry(Criterion::Budget, Decimal::ZERO, 5, detail)
    }
}
