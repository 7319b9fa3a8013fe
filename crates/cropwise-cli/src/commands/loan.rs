use cropwise_core::error::CropwiseError;
use cropwise_core::loan::LoanParameters;

use crate::output;

pub fn run(
    principal: f64,
    rate: f64,
    term: u32,
    show_schedule: bool,
    output_format: &str,
) -> Result<(), CropwiseError> {
    let params = LoanParameters {
        principal,
        annual_rate_pct: rate,
        term_months: term,
    };

    let schedule = cropwise_core::compute_loan(&params)?;

    match output_format {
        "json" => output::json::print_loan(&schedule)?,
        _ => output::table::print_loan(&params, &schedule, show_schedule),
    }

    Ok(())
}
