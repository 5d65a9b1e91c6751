use super::{StatusCategories, StatusCategory, mean_resolution_days, percentage};
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};

/// Headline numbers for a ticket collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub todo: u64,

    /// `completed / total * 100`, or 0 for an empty collection.
    pub completion_rate: f64,

    /// Mean resolution time in days, or 0 when no ticket has one. Callers show 0 as "N/A".
    pub avg_resolution_days: f64,
}

#[must_use]
pub fn kpis<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, categories: &StatusCategories) -> Kpis {
    let mut result = Kpis::default();
    let mut resolved = Vec::new();

    for ticket in tickets {
        result.total += 1;
        match categories.classify(&ticket.status) {
            Some(StatusCategory::Done) => result.completed += 1,
            Some(StatusCategory::InProgress) => result.in_progress += 1,
            Some(StatusCategory::Todo) => result.todo += 1,
            None => {}
        }

        if ticket.resolution_days.is_some() {
            resolved.push(ticket);
        }
    }

    result.completion_rate = percentage(result.completed, result.total);
    result.avg_resolution_days = mean_resolution_days(resolved);
    result
}
