//! Core compounding engine for monthly certificate earnings projections

use super::result::ProjectionResult;

/// Round a dollar amount to 2 decimal places (half away from zero).
///
/// Every recorded balance in a projection passes through this, matching how
/// the published calculator formats each month's figure.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project a certificate's monthly compounding trajectory and earnings.
///
/// `apy` is a percentage (4.25 means 4.25%). The monthly rate is derived as
/// `apy / 100 / 12` - a flat division, not a de-compounded effective rate.
/// This approximation is the published behavior of the calculator and is kept
/// for output parity.
///
/// The balance is rounded to 2 decimals after every month and the rounded
/// value becomes the base for the next month, so the rounding error compounds
/// along with the interest. Callers are expected to gate on the offer's
/// minimum deposit before invoking; no validation happens here.
///
/// Total over its domain: any finite input yields a defined result, including
/// zero or negative principals and a zero-month term (empty trajectory,
/// maturity equal to the rounded principal).
pub fn project_certificate(principal: f64, apy: f64, term_months: u32) -> ProjectionResult {
    let monthly_rate = apy / 100.0 / 12.0;
    let mut monthly_compounding = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for _month in 1..=term_months {
        balance = round2(balance * (1.0 + monthly_rate));
        monthly_compounding.push(balance);
    }

    let maturity_value = round2(balance);
    let interest_earned = round2(maturity_value - principal);

    ProjectionResult {
        interest_earned,
        maturity_value,
        monthly_compounding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_term() {
        let result = project_certificate(1000.0, 5.0, 0);

        assert!(result.monthly_compounding.is_empty());
        assert_eq!(result.maturity_value, 1000.00);
        assert_eq!(result.interest_earned, 0.00);
    }

    #[test]
    fn test_single_month() {
        // 10000 * (1 + 0.0425/12) = 10035.4166... -> 10035.42
        let result = project_certificate(10000.0, 4.25, 1);

        assert_eq!(result.monthly_compounding, vec![10035.42]);
        assert_eq!(result.maturity_value, 10035.42);
        assert_eq!(result.interest_earned, 35.42);
    }

    #[test]
    fn test_trajectory_length_matches_term() {
        for term in [1, 12, 36, 60] {
            let result = project_certificate(5000.0, 3.85, term);
            assert_eq!(result.monthly_compounding.len(), term as usize);
        }
    }

    #[test]
    fn test_trajectory_monotone_non_decreasing() {
        let result = project_certificate(10000.0, 3.95, 60);

        for pair in result.monthly_compounding.windows(2) {
            assert!(pair[0] <= pair[1], "balance decreased: {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_maturity_equals_last_trajectory_entry() {
        let result = project_certificate(10000.0, 4.34, 12);

        assert_eq!(result.maturity_value, *result.monthly_compounding.last().unwrap());
    }

    #[test]
    fn test_interest_additivity_after_rounding() {
        for (principal, apy, term) in [(10000.0, 4.25, 12), (500.0, 3.85, 6), (25.0, 3.50, 12)] {
            let result = project_certificate(principal, apy, term);
            assert_abs_diff_eq!(
                result.interest_earned,
                round2(result.maturity_value - principal),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_zero_principal_zero_apy() {
        let result = project_certificate(0.0, 0.0, 12);

        assert_eq!(result.monthly_compounding, vec![0.00; 12]);
        assert_eq!(result.maturity_value, 0.00);
        assert_eq!(result.interest_earned, 0.00);
    }

    #[test]
    fn test_zero_apy_preserves_principal() {
        let result = project_certificate(10000.0, 0.0, 24);

        assert_eq!(result.monthly_compounding, vec![10000.00; 24]);
        assert_eq!(result.interest_earned, 0.00);
    }

    #[test]
    fn test_rounding_feeds_next_month_base() {
        // Each recorded balance must be exactly 2-decimal and each month must
        // compound from the prior rounded value, not from an exact running
        // balance kept on the side.
        let result = project_certificate(10000.0, 4.25, 36);
        let monthly_rate = 4.25 / 100.0 / 12.0;

        let mut expected = 10000.0;
        for (month, &recorded) in result.monthly_compounding.iter().enumerate() {
            expected = round2(expected * (1.0 + monthly_rate));
            assert_eq!(recorded, expected, "divergence at month {}", month + 1);
            assert_eq!(recorded, round2(recorded));
        }
    }

    #[test]
    fn test_negative_principal_is_defined() {
        // Degenerate but must not panic; trajectory stays defined.
        let result = project_certificate(-100.0, 4.0, 6);

        assert_eq!(result.monthly_compounding.len(), 6);
        assert_eq!(result.interest_earned, round2(result.maturity_value - -100.0));
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // 0.125 is exactly representable, so the half is a true half
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(10.234), 10.23);
        assert_eq!(round2(10.236), 10.24);
    }
}
