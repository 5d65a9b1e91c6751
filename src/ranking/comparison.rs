use super::{PersonStats, individual_stats};
use crate::metrics::StatusCategories;
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};

/// Two assignees' stats, side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: PersonStats,
    pub b: PersonStats,
}

impl Comparison {
    /// The person with more completed tickets, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<&PersonStats> {
        match self.a.completed.cmp(&self.b.completed) {
            core::cmp::Ordering::Greater => Some(&self.a),
            core::cmp::Ordering::Less => Some(&self.b),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Compute stats for two people independently over the complete ticket set.
#[must_use]
pub fn compare(all_tickets: &[Ticket], person_a: &str, person_b: &str, categories: &StatusCategories) -> Comparison {
    Comparison {
        a: individual_stats(all_tickets, person_a, categories),
        b: individual_stats(all_tickets, person_b, categories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::{DEFAULT_DATE_FORMAT, RawTicket};

    fn ticket(assignee: &str, status: &str) -> Ticket {
        Ticket::from_raw(
            RawTicket {
                assignee: Some(assignee.to_string()),
                status: Some(status.to_string()),
                ..RawTicket::default()
            },
            DEFAULT_DATE_FORMAT,
        )
    }

    #[test]
    fn test_compare_is_independent() {
        let tickets = vec![ticket("Alice", "Done"), ticket("Alice", "Open"), ticket("Bob", "Done"), ticket("Bob", "Done")];
        let categories = StatusCategories::default();

        let comparison = compare(&tickets, "Alice", "Bob", &categories);
        assert_eq!(comparison.a, individual_stats(&tickets, "Alice", &categories));
        assert_eq!(comparison.b, individual_stats(&tickets, "Bob", &categories));
        assert_eq!(comparison.leader().map(|p| p.person.as_str()), Some("Bob"));
    }

    #[test]
    fn test_compare_same_person() {
        let tickets = vec![ticket("Alice", "Done")];
        let comparison = compare(&tickets, "Alice", "Alice", &StatusCategories::default());
        assert_eq!(comparison.a, comparison.b);
        assert!(comparison.leader().is_none());
    }
}
