use crate::filter::sorted_by_created_desc;
use crate::metrics::{Distribution, TicketField, distribution};
use crate::tickets::Ticket;
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn assigned_to<'a>(all_tickets: &'a [Ticket], person: &'a str) -> impl Iterator<Item = &'a Ticket> {
    all_tickets.iter().filter(move |t| t.assignee == person)
}

/// How `person`'s tickets are spread across statuses.
#[must_use]
pub fn person_status_breakdown(all_tickets: &[Ticket], person: &str) -> Distribution {
    distribution(assigned_to(all_tickets, person), TicketField::Status)
}

/// Tickets created per calendar day for `person`, oldest day first.
///
/// Tickets without a creation timestamp are not counted.
#[must_use]
pub fn activity_timeline(all_tickets: &[Ticket], person: &str) -> BTreeMap<NaiveDate, u64> {
    let mut timeline = BTreeMap::new();
    for date in assigned_to(all_tickets, person).filter_map(Ticket::created_date) {
        *timeline.entry(date).or_insert(0) += 1;
    }

    timeline
}

/// `person`'s most recently created tickets, newest first, at most `limit` of them.
///
/// Dashboards pass [`Config::recent_tickets_limit`](crate::config::Config::recent_tickets_limit).
#[must_use]
pub fn recent_tickets<'a>(all_tickets: &'a [Ticket], person: &str, limit: usize) -> Vec<&'a Ticket> {
    let mut recent = sorted_by_created_desc(all_tickets.iter().filter(|t| t.assignee == person));
    recent.truncate(limit);
    recent
}
