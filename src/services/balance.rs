//! Balance calculation
//!
//! The one formula for a net position. Per-project balances and the fleet
//! final balance both go through [`compute_balance`].

/// Net position: `contributions + returns - expenses`
///
/// Total over all reals; negative results are ordinary deficits and
/// non-finite inputs propagate.
pub fn compute_balance(contributions: f64, returns: f64, expenses: f64) -> f64 {
    contributions + returns - expenses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_balance() {
        assert_eq!(compute_balance(1200.0, 50.0, 1000.0), 250.0);
    }

    #[test]
    fn test_negative_balance() {
        assert_eq!(compute_balance(1000.0, 0.0, 1500.0), -500.0);
    }

    #[test]
    fn test_zero_and_negative_inputs() {
        assert_eq!(compute_balance(0.0, 0.0, 0.0), 0.0);
        assert_eq!(compute_balance(-10.0, -5.0, -20.0), 5.0);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(compute_balance(f64::NAN, 0.0, 0.0).is_nan());
        assert_eq!(compute_balance(0.0, 0.0, f64::INFINITY), f64::NEG_INFINITY);
    }
}
