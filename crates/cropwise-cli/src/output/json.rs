use cropwise_core::error::CropwiseError;
use cropwise_core::loan::LoanSchedule;
use cropwise_core::scoring::Recommendation;

pub fn print_recommendations(results: &[Recommendation]) -> Result<(), CropwiseError> {
    let json = serde_json::to_string_pretty(results)?;
    println!("{json}");
    Ok(())
}

pub fn print_loan(schedule: &LoanSchedule) -> Result<(), CropwiseError> {
    let json = serde_json::to_string_pretty(schedule)?;
    println!("{json}");
    Ok(())
}
