//! Loan amortization math
//!
//! Closed-form monthly payment computation for a fixed-rate loan. Stateless
//! and independent of the expense collection; the simulator CLI is its only
//! consumer.

use serde::{Deserialize, Serialize};

/// Terms of a loan to simulate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,
    /// Annual interest rate in percent (e.g. 3.5 for 3.5%)
    pub annual_rate_pct: f64,
    /// Duration in years; fractional years give fractional payment counts
    pub years: f64,
}

/// Result of a loan computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_pct: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate_pct,
            years,
        }
    }

    /// Compute the monthly payment, total cost, and total interest
    ///
    /// Standard annuity formula, with a separate zero-rate branch. Inputs
    /// are unconstrained user-entered numbers, so degenerate terms never
    /// panic: any non-finite payment (and any duration shorter than one
    /// payment) yields `None`, letting the caller reject the terms instead
    /// of displaying NaN or infinity.
    pub fn quote(&self) -> Option<LoanQuote> {
        let n = self.years * 12.0;
        if !n.is_finite() || n < 1.0 {
            return None;
        }

        let (monthly_payment, total_interest, total_cost) = if self.annual_rate_pct == 0.0 {
            let payment = self.principal / n;
            (payment, 0.0, self.principal)
        } else {
            let monthly_rate = self.annual_rate_pct / 100.0 / 12.0;
            let growth = (1.0 + monthly_rate).powf(n);
            let payment = self.principal * monthly_rate * growth / (growth - 1.0);
            let total_cost = payment * n;
            (payment, total_cost - self.principal, total_cost)
        };

        if !monthly_payment.is_finite() {
            return None;
        }

        Some(LoanQuote {
            monthly_payment,
            total_interest,
            total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_amortization() {
        // 200k over 20 years at 3.5%
        let quote = LoanTerms::new(200_000.0, 3.5, 20.0).quote().unwrap();

        assert!((quote.monthly_payment - 1159.92).abs() < 0.01);
        assert!((quote.total_cost - quote.monthly_payment * 240.0).abs() < 1e-6);
        assert!((quote.total_interest - (quote.total_cost - 200_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate() {
        let quote = LoanTerms::new(120_000.0, 0.0, 10.0).quote().unwrap();

        assert_eq!(quote.monthly_payment, 1000.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 120_000.0);
    }

    #[test]
    fn test_degenerate_terms_yield_none() {
        // Zero or negative duration: fewer than one payment
        assert!(LoanTerms::new(100_000.0, 3.0, 0.0).quote().is_none());
        assert!(LoanTerms::new(100_000.0, 0.0, 0.0).quote().is_none());
        assert!(LoanTerms::new(100_000.0, 3.0, -5.0).quote().is_none());
        assert!(LoanTerms::new(100_000.0, 3.0, f64::NAN).quote().is_none());
        assert!(LoanTerms::new(f64::NAN, 3.0, 10.0).quote().is_none());
    }

    #[test]
    fn test_zero_principal_is_tolerated() {
        let quote = LoanTerms::new(0.0, 3.5, 10.0).quote().unwrap();
        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_cost, 0.0);
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let low = LoanTerms::new(150_000.0, 2.0, 15.0).quote().unwrap();
        let high = LoanTerms::new(150_000.0, 4.0, 15.0).quote().unwrap();

        assert!(high.monthly_payment > low.monthly_payment);
        assert!(high.total_interest > low.total_interest);
    }
}
