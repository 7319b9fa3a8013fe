pub mod catalog;
pub mod error;
pub mod loan;
pub mod model;
pub mod scoring;

use catalog::schema::CropCatalog;
use model::FarmerProfile;
use scoring::{RecommendOptions, Recommendation};

pub use loan::{compute_loan, AmortizationEntry, LoanParameters, LoanSchedule};

/// Main API entry point: rank a catalog's crops against a farmer's conditions.
///
/// The farmer profile is scored as-is; a profile missing any of the four
/// required fields produces an empty crop list rather than an error, since
/// partial form submissions are an expected condition.
pub fn recommend(
    farmer: &FarmerProfile,
    catalog: &CropCatalog,
    options: &RecommendOptions,
) -> Recommendation {
    Recommendation {
        catalog_name: catalog.name.clone(),
        advanced_mode: options.advanced,
        crops: scoring::rank(farmer, catalog, options),
    }
}
