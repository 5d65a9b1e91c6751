use super::FilterSelection;
use crate::tickets::Ticket;

const LOG_TARGET: &str = "    filter";

/// Keep the tickets that satisfy `selection`, preserving their order.
///
/// Applying the same selection to its own output returns the same tickets.
#[must_use]
pub fn apply<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, selection: &FilterSelection) -> Vec<&'a Ticket> {
    let needle = selection.search_needle();

    let mut seen = 0_usize;
    let kept: Vec<_> = tickets
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|ticket| selection.matches_with_needle(ticket, needle.as_deref()))
        .collect();

    log::trace!(target: LOG_TARGET, "Kept {} of {seen} ticket(s)", kept.len());
    kept
}

/// Order tickets newest first. Tickets without a creation timestamp come last; ties keep their
/// input order.
#[must_use]
pub fn sorted_by_created_desc<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<&'a Ticket> {
    let mut sorted: Vec<_> = tickets.into_iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::{DEFAULT_DATE_FORMAT, RawTicket};
    use std::collections::BTreeSet;

    fn ticket(key: &str, assignee: &str, status: &str, created: Option<&str>) -> Ticket {
        Ticket::from_raw(
            RawTicket {
                key: Some(key.to_string()),
                summary: Some(format!("Summary for {key}")),
                assignee: Some(assignee.to_string()),
                status: Some(status.to_string()),
                created: created.map(str::to_string),
                ..RawTicket::default()
            },
            DEFAULT_DATE_FORMAT,
        )
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket("ABC-1", "Alice", "Done", Some("01/Jan/24 10:00 AM")),
            ticket("ABC-2", "Bob", "To Do", Some("03/Jan/24 10:00 AM")),
            ticket("ABC-3", "Alice", "In Progress", None),
            ticket("ABC-4", "Carol", "Done", Some("02/Jan/24 10:00 AM")),
        ]
    }

    fn selection(assignees: &[&str], statuses: &[&str]) -> FilterSelection {
        FilterSelection {
            assignees: assignees.iter().map(|s| (*s).to_string()).collect(),
            statuses: statuses.iter().map(|s| (*s).to_string()).collect(),
            priorities: BTreeSet::from(["Medium".to_string()]),
            ..FilterSelection::default()
        }
    }

    fn keys(tickets: &[&Ticket]) -> Vec<String> {
        tickets.iter().map(|t| t.key.clone()).collect()
    }

    #[test]
    fn test_apply_empty_input() {
        let tickets: Vec<Ticket> = Vec::new();
        assert!(apply(&tickets, &selection(&["Alice"], &["Done"])).is_empty());
    }

    #[test]
    fn test_apply_preserves_order() {
        let tickets = sample();
        let kept = apply(&tickets, &selection(&["Alice", "Carol"], &["Done", "In Progress"]));
        assert_eq!(keys(&kept), ["ABC-1", "ABC-3", "ABC-4"]);
    }

    #[test]
    fn test_apply_empty_set_matches_nothing() {
        let tickets = sample();
        let kept = apply(&tickets, &selection(&[], &["Done", "To Do", "In Progress"]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let tickets = sample();
        let sel = selection(&["Alice", "Bob"], &["Done", "To Do", "In Progress"]).with_search_text("abc");

        let once = apply(&tickets, &sel);
        let twice = apply(once.iter().copied(), &sel);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_does_not_modify_source() {
        let tickets = sample();
        let before = tickets.clone();
        let _ = apply(&tickets, &selection(&["Alice"], &["Done"]));
        assert_eq!(tickets, before);
    }

    #[test]
    fn test_sorted_by_created_desc() {
        let tickets = sample();
        let sorted = sorted_by_created_desc(&tickets);
        assert_eq!(keys(&sorted), ["ABC-2", "ABC-4", "ABC-1", "ABC-3"]);
    }
}
