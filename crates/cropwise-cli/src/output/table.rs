use cropwise_core::loan::{LoanParameters, LoanSchedule};
use cropwise_core::model::FarmerProfile;
use cropwise_core::scoring::Recommendation;

pub fn print_recommendations(
    results: &[Recommendation],
    farmer: &FarmerProfile,
    verbose: bool,
) {
    let multi_catalog = results.len() > 1;

    for (i, result) in results.iter().enumerate() {
        if multi_catalog {
            if i > 0 {
                println!();
            }
        }
        println!("=== {} ===\n", result.catalog_name);

        if result.crops.is_empty() {
            if farmer.basic_conditions().is_none() {
                println!("  No recommendations: the profile is missing required fields");
                println!("  (soil type, pH, temperature and rainfall are all needed).\n");
            } else {
                println!("  No crop in this catalog matches the given conditions.\n");
            }
            continue;
        }

        let mode = if result.advanced_mode {
            "basic + advanced criteria"
        } else {
            "basic criteria"
        };
        println!("  Scored with {}.\n", mode);

        let max_name = result
            .crops
            .iter()
            .map(|c| c.crop.name.len())
            .max()
            .unwrap_or(10);

        for (position, entry) in result.crops.iter().enumerate() {
            println!(
                "  {}. {:<width$}  score {:>5}  ({} suitability, {} season, {} water)",
                position + 1,
                entry.crop.name,
                entry.score.round_dp(1).to_string(),
                entry.suitability,
                entry.crop.season,
                entry.crop.water_requirement,
                width = max_name
            );

            if verbose {
                for criterion in &entry.breakdown {
                    println!(
                        "       {:<15} {:>5} / {:<3}  {}",
                        criterion.criterion.label(),
                        criterion.points.round_dp(1).to_string(),
                        criterion.max_points.to_string(),
                        criterion.detail
                    );
                }
                println!();
            }
        }

        if !verbose {
            println!();
        }
    }
}

pub fn print_loan(params: &LoanParameters, schedule: &LoanSchedule, show_schedule: bool) {
    println!(
        "Loan of {:.2} at {}% over {} months\n",
        params.principal, params.annual_rate_pct, params.term_months
    );
    println!("  Monthly payment: {:>12.2}", schedule.monthly_payment);
    println!("  Total payment:   {:>12.2}", schedule.total_payment);
    println!("  Total interest:  {:>12.2}", schedule.total_interest);
    println!();

    if show_schedule {
        println!(
            "  {:>5}  {:>12}  {:>12}  {:>12}  {:>12}",
            "Month", "Payment", "Principal", "Interest", "Balance"
        );
        println!("  {}", "-".repeat(5 + 2 + (12 + 2) * 4));
        for entry in &schedule.entries {
            println!(
                "  {:>5}  {:>12.2}  {:>12.2}  {:>12.2}  {:>12.2}",
                entry.month,
                entry.payment,
                entry.principal_portion,
                entry.interest_portion,
                entry.remaining_balance
            );
        }
        println!();
    }
}
