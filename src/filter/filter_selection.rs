use super::FilterOptions;
use crate::tickets::Ticket;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which tickets a dashboard view should include.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Assignees to keep. Empty keeps nothing.
    #[serde(default)]
    pub assignees: BTreeSet<String>,

    /// Statuses to keep. Empty keeps nothing.
    #[serde(default)]
    pub statuses: BTreeSet<String>,

    /// Priorities to keep. Empty keeps nothing.
    #[serde(default)]
    pub priorities: BTreeSet<String>,

    /// Inclusive range applied to the date of `created_at`.
    #[serde(default)]
    pub date_range: Option<(NaiveDate, NaiveDate)>,

    /// Case-insensitive substring searched in the summary and the key.
    #[serde(default)]
    pub search_text: Option<String>,
}

impl FilterSelection {
    /// A selection with every assignee, status and priority of `options` selected, and a date
    /// range from the earliest creation date through `today`.
    #[must_use]
    pub fn select_all(options: &FilterOptions, today: NaiveDate) -> Self {
        Self {
            assignees: options.assignees.iter().cloned().collect(),
            statuses: options.statuses.iter().cloned().collect(),
            priorities: options.priorities.iter().cloned().collect(),
            date_range: options.earliest_created.map(|earliest| (earliest, today.max(earliest))),
            search_text: None,
        }
    }

    #[must_use]
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Returns `true` if `ticket` satisfies every criterion of this selection.
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_with_needle(ticket, self.search_needle().as_deref())
    }

    /// The lowercased search text, or `None` when searching is disabled.
    pub(super) fn search_needle(&self) -> Option<String> {
        self.search_text.as_deref().filter(|text| !text.is_empty()).map(str::to_lowercase)
    }

    pub(super) fn matches_with_needle(&self, ticket: &Ticket, needle: Option<&str>) -> bool {
        if !self.assignees.contains(&ticket.assignee)
            || !self.statuses.contains(&ticket.status)
            || !self.priorities.contains(&ticket.priority)
        {
            return false;
        }

        if let Some((start, end)) = self.date_range {
            match ticket.created_date() {
                Some(date) if start <= date && date <= end => {}
                _ => return false,
            }
        }

        if let Some(needle) = needle {
            return ticket.summary.to_lowercase().contains(needle) || ticket.key.to_lowercase().contains(needle);
        }

        true
    }
}
