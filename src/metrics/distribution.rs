use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

/// A categorical ticket field that can be grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum TicketField {
    Status,
    Priority,
    #[strum(serialize = "Issue Type")]
    IssueType,
    Reporter,
    Assignee,
}

impl TicketField {
    #[must_use]
    pub fn value(self, ticket: &Ticket) -> &str {
        match self {
            Self::Status => &ticket.status,
            Self::Priority => &ticket.priority,
            Self::IssueType => &ticket.issue_type,
            Self::Reporter => &ticket.reporter,
            Self::Assignee => &ticket.assignee,
        }
    }
}

/// Ticket counts per distinct value of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: BTreeMap<String, u64>,
}

impl Distribution {
    #[must_use]
    pub fn get(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// All values with their counts, in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(value, count)| (value.as_str(), *count))
    }

    /// The `n` most frequent values, most frequent first. Equal counts are ordered by value.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Count tickets per value of `field`.
///
/// The full mapping is returned; limiting it for display (e.g. top ten reporters) is done with
/// [`Distribution::top`].
#[must_use]
pub fn distribution<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, field: TicketField) -> Distribution {
    let mut counts = BTreeMap::new();
    for ticket in tickets {
        *counts.entry(field.value(ticket).to_string()).or_insert(0) += 1;
    }

    Distribution { counts }
}
