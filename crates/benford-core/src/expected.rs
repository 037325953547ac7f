//! Expected first-digit counts under Benford's Law.

use crate::constants::{BENFORD_PROPORTIONS, DIGIT_COUNT};

/// Expected count per leading digit for `total` observations, digit 1 first.
///
/// Each count is `total * proportion` rounded to the nearest integer, ties
/// to even. Because every digit is rounded independently the counts may
/// miss `total` by at most one per digit. A `total` of zero yields all
/// zeros, which the goodness-of-fit test rejects.
pub fn expected_counts(total: u64) -> [f64; DIGIT_COUNT] {
    let n = total as f64;
    BENFORD_PROPORTIONS.map(|p| (n * p).round_ties_even())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousand_observations() {
        assert_eq!(
            expected_counts(1000),
            [301.0, 176.0, 125.0, 97.0, 79.0, 67.0, 58.0, 51.0, 46.0]
        );
    }

    #[test]
    fn zero_total_is_all_zero() {
        assert_eq!(expected_counts(0), [0.0; 9]);
    }

    #[test]
    fn rounds_to_nearest() {
        let e = expected_counts(50);
        assert_eq!(e[0], 15.0);
        assert_eq!(e[2], 6.0);
        assert_eq!(e[3], 5.0);
    }

    #[test]
    fn ties_round_to_even() {
        // 20 * 0.125 = 2.5
        assert_eq!(expected_counts(20)[2], 2.0);
        // 100 * 0.125 = 12.5 rounds to 12
        assert_eq!(expected_counts(100)[2], 12.0);
    }
}
