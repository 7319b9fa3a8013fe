//! Integration tests for the recommend() and compute_loan() entry points,
//! exercised against the builtin crop catalog.

use cropwise_core::catalog::builtin::load_preset;
use cropwise_core::loan::LoanParameters;
use cropwise_core::model::{FarmerProfile, NpkReading};
use cropwise_core::scoring::{RecommendOptions, Suitability};
use cropwise_core::{compute_loan, recommend};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn paddy_farmer() -> FarmerProfile {
    FarmerProfile {
        soil_type: Some("clay".into()),
        ph_level: Some(dec!(6.5)),
        temperature: Some(dec!(27)),
        rainfall: Some(dec!(1300)),
        ..FarmerProfile::default()
    }
}

// ---------------------------------------------------------------------------
// Test 1: Rice-friendly conditions put Rice first with a perfect basic score
// ---------------------------------------------------------------------------
#[test]
fn rice_conditions_rank_rice_first() {
    let catalog = load_preset("standard").unwrap();
    let result = recommend(&paddy_farmer(), &catalog, &RecommendOptions::default());

    assert_eq!(result.catalog_name, catalog.name);
    assert!(!result.advanced_mode);
    assert!(!result.crops.is_empty());
    assert_eq!(result.crops[0].crop.name, "Rice");
    assert_eq!(result.crops[0].score, dec!(50));
}

// ---------------------------------------------------------------------------
// Test 2: Output is capped at top_n, sorted non-increasing, no zero scores
// ---------------------------------------------------------------------------
#[test]
fn ranked_output_is_sorted_capped_and_positive() {
    let catalog = load_preset("standard").unwrap();
    let result = recommend(&paddy_farmer(), &catalog, &RecommendOptions::default());

    assert!(result.crops.len() <= 5);
    for window in result.crops.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
    for entry in &result.crops {
        assert!(entry.score > Decimal::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Test 3: Missing required field yields an empty recommendation, not an error
// ---------------------------------------------------------------------------
#[test]
fn partial_profile_yields_empty_recommendation() {
    let catalog = load_preset("standard").unwrap();
    let farmer = FarmerProfile {
        soil_type: Some("clay".into()),
        ph_level: Some(dec!(6.5)),
        ..FarmerProfile::default()
    };
    let result = recommend(&farmer, &catalog, &RecommendOptions::default());
    assert!(result.crops.is_empty());
}

// ---------------------------------------------------------------------------
// Test 4: Advanced inputs lift suitable crops into the High band
// ---------------------------------------------------------------------------
#[test]
fn advanced_inputs_raise_the_score() {
    let catalog = load_preset("standard").unwrap();
    let mut farmer = paddy_farmer();
    farmer.soil_moisture = Some(dec!(80));
    farmer.irrigation_available = Some(true);
    farmer.season = Some("summer".into());
    farmer.land_area = Some(dec!(3));
    farmer.budget = Some(dec!(60000));
    farmer.soil_npk = Some(NpkReading {
        nitrogen: Some(dec!(20)),
        phosphorus: Some(dec!(10)),
        potassium: Some(dec!(10)),
    });

    let options = RecommendOptions {
        advanced: true,
        top_n: 5,
    };
    let result = recommend(&farmer, &catalog, &options);

    let rice = result
        .crops
        .iter()
        .find(|c| c.crop.name == "Rice")
        .expect("rice should rank");
    // Basic 50 + moisture 10 + nitrogen 3 + irrigation 5 + season 5
    // + land 5 + budget 5.
    assert_eq!(rice.score, dec!(83));
    assert_eq!(rice.suitability, Suitability::High);
}

// ---------------------------------------------------------------------------
// Test 5: Advanced mode without the extra readings changes nothing
// ---------------------------------------------------------------------------
#[test]
fn advanced_mode_without_data_matches_basic_totals() {
    let catalog = load_preset("standard").unwrap();
    let basic = recommend(&paddy_farmer(), &catalog, &RecommendOptions::default());
    let advanced = recommend(
        &paddy_farmer(),
        &catalog,
        &RecommendOptions {
            advanced: true,
            top_n: 5,
        },
    );

    assert_eq!(basic.crops.len(), advanced.crops.len());
    for (b, a) in basic.crops.iter().zip(&advanced.crops) {
        assert_eq!(b.crop.id, a.crop.id);
        assert_eq!(b.score, a.score);
    }
}

// ---------------------------------------------------------------------------
// Test 6: Repeated runs over the same inputs are identical
// ---------------------------------------------------------------------------
#[test]
fn recommendation_is_idempotent() {
    let catalog = load_preset("standard").unwrap();
    let farmer = paddy_farmer();
    let first = recommend(&farmer, &catalog, &RecommendOptions::default());
    let second = recommend(&farmer, &catalog, &RecommendOptions::default());

    assert_eq!(first.crops.len(), second.crops.len());
    for (a, b) in first.crops.iter().zip(&second.crops) {
        assert_eq!(a.crop.id, b.crop.id);
        assert_eq!(a.score, b.score);
    }
}

// ---------------------------------------------------------------------------
// Test 7: Farmer profile parsed from form JSON flows through end to end
// ---------------------------------------------------------------------------
#[test]
fn profile_from_json_flows_through() {
    let catalog = load_preset("standard").unwrap();
    let farmer: FarmerProfile = serde_json::from_str(
        r#"{
            "soil_type": "Sandy-Loam",
            "ph_level": "6.5",
            "temperature": "30",
            "rainfall": "900",
            "irrigation_available": true
        }"#,
    )
    .unwrap();

    let result = recommend(
        &farmer,
        &catalog,
        &RecommendOptions {
            advanced: true,
            top_n: 5,
        },
    );
    // "Sandy-Loam" normalizes to "sandy loam": Cotton and Groundnut accept it.
    assert!(result.crops.iter().any(|c| c.crop.name == "Cotton"));
    assert!(result.crops.iter().any(|c| c.crop.name == "Groundnut"));
}

// ---------------------------------------------------------------------------
// Test 8: Loan engine reference values (EMI formula verification)
// ---------------------------------------------------------------------------
#[test]
fn loan_reference_schedule() {
    let schedule = compute_loan(&LoanParameters {
        principal: 100_000.0,
        annual_rate_pct: 12.0,
        term_months: 12,
    })
    .unwrap();

    assert!((schedule.monthly_payment - 8884.88).abs() < 0.01);
    assert_eq!(schedule.entries.len(), 12);
    assert_eq!(schedule.entries[11].remaining_balance, 0.0);

    let repaid: f64 = schedule.entries.iter().map(|e| e.principal_portion).sum();
    assert!((repaid - 100_000.0).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Test 9: Zero-interest loan splits evenly with no interest portions
// ---------------------------------------------------------------------------
#[test]
fn zero_interest_loan() {
    let schedule = compute_loan(&LoanParameters {
        principal: 120_000.0,
        annual_rate_pct: 0.0,
        term_months: 12,
    })
    .unwrap();

    assert_eq!(schedule.monthly_payment, 10_000.0);
    assert!(schedule.entries.iter().all(|e| e.interest_portion == 0.0));
    assert_eq!(schedule.entries[11].remaining_balance, 0.0);
}
