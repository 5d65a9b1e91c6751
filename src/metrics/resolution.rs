use crate::tickets::Ticket;

/// The resolution time of every ticket that has one, in input order.
///
/// Values are returned raw; binning them for a histogram is left to the caller.
#[must_use]
pub fn resolution_histogram<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<i64> {
    tickets.into_iter().filter_map(|t| t.resolution_days).collect()
}

/// Arithmetic mean of the present resolution times, or 0 when there are none.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "Day counts and ticket counts are far below 2^52")]
pub fn mean_resolution_days<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> f64 {
    let (sum, count) = tickets
        .into_iter()
        .filter_map(|t| t.resolution_days)
        .fold((0_i64, 0_u64), |(sum, count), days| (sum + days, count + 1));

    if count == 0 { 0.0 } else { sum as f64 / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::{DEFAULT_DATE_FORMAT, RawTicket};

    fn ticket(created: Option<&str>, resolved: Option<&str>) -> Ticket {
        Ticket::from_raw(
            RawTicket {
                created: created.map(str::to_string),
                resolved: resolved.map(str::to_string),
                ..RawTicket::default()
            },
            DEFAULT_DATE_FORMAT,
        )
    }

    #[test]
    fn test_histogram_skips_missing() {
        let tickets = vec![
            ticket(Some("01/Jan/24 10:00 AM"), Some("04/Jan/24 10:00 AM")),
            ticket(Some("01/Jan/24 10:00 AM"), None),
            ticket(Some("05/Jan/24 10:00 AM"), Some("01/Jan/24 10:00 AM")),
        ];
        assert_eq!(resolution_histogram(&tickets), [3, -4]);
    }

    #[test]
    fn test_histogram_empty() {
        let tickets: Vec<Ticket> = Vec::new();
        assert!(resolution_histogram(&tickets).is_empty());
    }

    #[test]
    fn test_mean_includes_negative_values() {
        let tickets = vec![
            ticket(Some("01/Jan/24 10:00 AM"), Some("07/Jan/24 10:00 AM")),
            ticket(Some("05/Jan/24 10:00 AM"), Some("01/Jan/24 10:00 AM")),
        ];
        assert!((mean_resolution_days(&tickets) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_without_values_is_zero() {
        let tickets = vec![ticket(None, None)];
        assert!(mean_resolution_days(&tickets).abs() < f64::EPSILON);
    }
}
