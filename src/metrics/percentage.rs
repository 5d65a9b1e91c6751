/// `part / whole * 100`, or 0 when `whole` is 0.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "Ticket counts are far below 2^52")]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Round to one decimal place, halves to even.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!((percentage(3, 3) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_of_zero_is_zero() {
        assert!(percentage(0, 0).abs() < f64::EPSILON);
        assert!(percentage(5, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round1() {
        assert!((round1(66.666_666) - 66.7).abs() < 1e-9);
        assert!((round1(33.333_333) - 33.3).abs() < 1e-9);
        assert!((round1(100.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_round1_halves_to_even() {
        assert!((round1(12.25) - 12.2).abs() < 1e-9);
        assert!((round1(0.75) - 0.8).abs() < 1e-9);
        assert!((round1(0.25) - 0.2).abs() < 1e-9);
    }
}
