use cropwise_core::catalog::builtin;
use cropwise_core::error::CropwiseError;
use std::path::Path;

pub fn list() -> Result<(), CropwiseError> {
    println!("Available predefined catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        println!(
            "  {:<10} {} (v{}), {} crops",
            name,
            catalog.name,
            catalog.version,
            catalog.crops.len()
        );
        if let Some(ref desc) = catalog.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), CropwiseError> {
    let catalog = builtin::load_preset(preset)?;

    println!("{} (version {})\n", catalog.name, catalog.version);

    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    println!(
        "Each crop is scored against the farmer's conditions; the ranges below\n\
         are the tolerated envelopes (closed intervals).\n"
    );

    // Find max crop name length for alignment
    let max_name_len = catalog
        .crops
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(12);

    println!(
        "  {:<width$}  {:<10}  {:<10}  {:<12}  {:<9}  {:<14}  Soil types",
        "Crop",
        "pH",
        "Temp (C)",
        "Rain (mm)",
        "Water",
        "Season",
        width = max_name_len + 2
    );
    println!(
        "  {}",
        "-".repeat(max_name_len + 2 + 10 + 10 + 12 + 9 + 14 + 24)
    );

    for crop in &catalog.crops {
        println!(
            "  {:<width$}  {:<10}  {:<10}  {:<12}  {:<9}  {:<14}  {}",
            crop.name,
            crop.ph_range.to_string(),
            crop.temperature_range.to_string(),
            crop.rainfall_range.to_string(),
            crop.water_requirement.to_string(),
            crop.season,
            crop.soil_types.join(", "),
            width = max_name_len + 2
        );
    }

    println!();

    Ok(())
}

pub fn schema() -> Result<(), CropwiseError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file defines the crop profiles that `cropwise recommend` scores
a farmer's conditions against.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog covers
  version       (string, required)  Version identifier (e.g., "2025.1")
  crops         (array, required)   List of crop records (see below)

Each record in the "crops" array:
  id            (number, optional)  Unique id; defaults to the record position
  name          (string, required)  Crop name
  soil_types    (array,  required)  Accepted soil labels. Labels are
                                    normalized (lowercased, separators
                                    collapsed, common aliases resolved),
                                    so "Sandy-Loam" and "sandy loam" match.
  ph_range      (object, required)  {{ "min": "5.5", "max": "7.5" }}, pH 0-14
  temperature_range                 Same shape, degrees C
  rainfall_range                    Same shape, annual mm
  water_requirement (string)        "low", "moderate" or "high"
  season        (string, required)  Season label, matched by substring
  fertilizer    (string, optional)  Descriptor; "Nitrogen-rich" etc. gates
                                    the nutrient criteria
  growth_days   (number, optional)  Days from sowing to harvest
  market_value  (string, required)  "low", "medium" or "high"
  pest_resistance (string, required) "low", "medium" or "high"
  drought_tolerance (string, optional)
  notes         (string, optional)  Free text; "partial shade" here marks
                                    shade-tolerant crops

Alternate shapes are accepted and normalized before validation: flat range
fields (min_ph/max_ph or camelCase minPh/maxPh), fields nested under a
"details" object, and "growing_season" for "season".

Example:
{{
  "name": "My regional catalog",
  "version": "1.0",
  "crops": [
    {{
      "id": 1,
      "name": "Wheat",
      "soil_types": ["loam", "clay"],
      "ph_range": {{ "min": "6.0", "max": "7.5" }},
      "temperature_range": {{ "min": "10", "max": "24" }},
      "rainfall_range": {{ "min": "450", "max": "650" }},
      "water_requirement": "moderate",
      "season": "Winter",
      "fertilizer": "Balanced NPK (NPK 10-10-10)",
      "market_value": "high",
      "pest_resistance": "high"
    }}
  ]
}}

Note: range values should be quoted strings, not bare numbers, to preserve
exact decimal precision (e.g., "5.5" not 5.5). Bare numbers are tolerated.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CropwiseError> {
    let catalog = cropwise_core::catalog::load_catalog(file)?;

    println!(
        "Catalog '{}' (v{}) is valid.",
        catalog.name, catalog.version
    );
    println!("  Crops: {}", catalog.crops.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for crop in &catalog.crops {
        let descriptor = crop.fertilizer.to_lowercase();
        if !["nitrogen", "phosphorus", "potassium"]
            .iter()
            .any(|n| descriptor.contains(&format!("{}-rich", n)))
        {
            warnings.push(format!(
                "crop '{}' has no nutrient emphasis in its fertilizer descriptor; \
                 the NPK criteria can never award it points",
                crop.name
            ));
        }
        for (what, range) in [
            ("pH", &crop.ph_range),
            ("temperature", &crop.temperature_range),
            ("rainfall", &crop.rainfall_range),
        ] {
            if range.min == range.max {
                warnings.push(format!(
                    "crop '{}' has a single-point {} range ({})",
                    crop.name, what, range
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
