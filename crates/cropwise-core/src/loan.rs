//! Loan amortization engine: EMI plus a month-by-month repayment schedule.
//!
//! Computations run in f64; the schedule clamps the final month so the loan
//! zeroes out exactly instead of leaving floating-point residue.

use crate::error::CropwiseError;
use serde::{Deserialize, Serialize};

/// Input parameters for a loan computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount in currency units.
    pub principal: f64,
    /// Annual interest rate in percent, e.g. 8.5.
    pub annual_rate_pct: f64,
    pub term_months: u32,
}

impl LoanParameters {
    pub fn validate(&self) -> Result<(), CropwiseError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(CropwiseError::InvalidPrincipal(self.principal));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CropwiseError::InvalidRate(self.annual_rate_pct));
        }
        if self.term_months == 0 {
            return Err(CropwiseError::InvalidTerm);
        }
        Ok(())
    }
}

/// One month of the repayment schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based month number.
    pub month: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64,
}

/// Full loan computation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub entries: Vec<AmortizationEntry>,
}

/// Compute the fixed monthly payment and the amortization schedule.
///
/// Uses the standard amortizing-loan formula
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with a monthly rate
/// `r = annual_rate_pct / 12 / 100`. A zero rate is special-cased to
/// `P / n` to avoid the division by zero in the general formula.
///
/// The final entry's `remaining_balance` is exactly 0: the last month's
/// principal portion is set to the outstanding balance, absorbing any
/// floating-point drift into the final principal/interest split while the
/// recorded `payment` stays invariant.
pub fn compute_loan(params: &LoanParameters) -> Result<LoanSchedule, CropwiseError> {
    params.validate()?;

    let principal = params.principal;
    let term = params.term_months;
    let rate = params.annual_rate_pct / 12.0 / 100.0;

    let payment = if rate == 0.0 {
        principal / term as f64
    } else {
        let growth = (1.0 + rate).powi(term as i32);
        principal * rate * growth / (growth - 1.0)
    };

    let total_payment = payment * term as f64;
    let total_interest = total_payment - principal;

    let mut entries = Vec::with_capacity(term as usize);
    let mut balance = principal;
    for month in 1..=term {
        let interest_portion = balance * rate;
        let principal_portion = if month == term {
            balance
        } else {
            payment - interest_portion
        };

        balance -= principal_portion;
        if balance < 0.0 {
            balance = 0.0;
        }

        entries.push(AmortizationEntry {
            month,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    Ok(LoanSchedule {
        monthly_payment: payment,
        total_payment,
        total_interest,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(principal: f64, rate: f64, term: u32) -> LoanParameters {
        LoanParameters {
            principal,
            annual_rate_pct: rate,
            term_months: term,
        }
    }

    #[test]
    fn test_standard_emi() {
        let schedule = compute_loan(&params(100_000.0, 12.0, 12)).unwrap();
        assert!((schedule.monthly_payment - 8884.88).abs() < 0.01);
        assert_eq!(schedule.entries.len(), 12);
        assert_eq!(schedule.entries[11].remaining_balance, 0.0);
    }

    #[test]
    fn test_zero_interest() {
        let schedule = compute_loan(&params(120_000.0, 0.0, 12)).unwrap();
        assert_eq!(schedule.monthly_payment, 10_000.0);
        assert_eq!(schedule.total_interest, 0.0);
        for entry in &schedule.entries {
            assert_eq!(entry.interest_portion, 0.0);
        }
        assert_eq!(schedule.entries[11].remaining_balance, 0.0);
    }

    #[test]
    fn test_principal_portions_sum_to_principal() {
        let schedule = compute_loan(&params(100_000.0, 12.0, 12)).unwrap();
        let total: f64 = schedule.entries.iter().map(|e| e.principal_portion).sum();
        assert!((total - 100_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_payment_invariant_across_months() {
        let schedule = compute_loan(&params(250_000.0, 9.5, 24)).unwrap();
        for entry in &schedule.entries {
            assert_eq!(entry.payment, schedule.monthly_payment);
        }
    }

    #[test]
    fn test_balance_is_decreasing() {
        let schedule = compute_loan(&params(50_000.0, 7.0, 36)).unwrap();
        let mut previous = 50_000.0;
        for entry in &schedule.entries {
            assert!(entry.remaining_balance < previous);
            previous = entry.remaining_balance;
        }
        assert_eq!(schedule.entries.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_single_month_term() {
        let schedule = compute_loan(&params(1_000.0, 12.0, 1)).unwrap();
        assert_eq!(schedule.entries.len(), 1);
        let entry = &schedule.entries[0];
        assert!((entry.interest_portion - 10.0).abs() < 1e-9);
        assert!((entry.principal_portion - 1_000.0).abs() < 1e-9);
        assert_eq!(entry.remaining_balance, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let err = compute_loan(&params(0.0, 12.0, 12)).unwrap_err();
        assert!(matches!(err, CropwiseError::InvalidPrincipal(_)));
        assert!(compute_loan(&params(-5.0, 12.0, 12)).is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = compute_loan(&params(1_000.0, -1.0, 12)).unwrap_err();
        assert!(matches!(err, CropwiseError::InvalidRate(_)));
    }

    #[test]
    fn test_rejects_zero_term() {
        let err = compute_loan(&params(1_000.0, 12.0, 0)).unwrap_err();
        assert!(matches!(err, CropwiseError::InvalidTerm));
    }
}
