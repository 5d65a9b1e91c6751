use crate::tickets::Ticket;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The choices a filter UI offers for a ticket collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct assignees, sorted.
    pub assignees: Vec<String>,

    /// Distinct statuses, sorted.
    pub statuses: Vec<String>,

    /// Distinct priorities, sorted.
    pub priorities: Vec<String>,

    /// Earliest creation date, if any ticket has one.
    pub earliest_created: Option<NaiveDate>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut assignees = BTreeSet::new();
        let mut statuses = BTreeSet::new();
        let mut priorities = BTreeSet::new();
        let mut earliest_created: Option<NaiveDate> = None;

        for ticket in tickets {
            let _ = assignees.insert(ticket.assignee.as_str());
            let _ = statuses.insert(ticket.status.as_str());
            let _ = priorities.insert(ticket.priority.as_str());

            if let Some(date) = ticket.created_date() {
                earliest_created = Some(earliest_created.map_or(date, |current| current.min(date)));
            }
        }

        Self {
            assignees: assignees.into_iter().map(str::to_string).collect(),
            statuses: statuses.into_iter().map(str::to_string).collect(),
            priorities: priorities.into_iter().map(str::to_string).collect(),
            earliest_created,
        }
    }
}
