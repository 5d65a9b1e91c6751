use crate::metrics::{StatusCategories, StatusCategory, mean_resolution_days, percentage, round1};
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One assignee's performance across the whole ticket set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonStats {
    pub person: String,
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,

    /// `completed / total * 100`, rounded to one decimal.
    pub efficiency: f64,

    /// Mean resolution days of the person's tickets, or 0 when none has one.
    pub avg_resolution_days: f64,

    /// 1-based position in [`completion_ranking`], or `None` when the person has completed
    /// nothing.
    pub rank: Option<usize>,
}

/// Assignees with at least one done ticket and their done counts, most first.
///
/// Ties keep ascending name order.
#[must_use]
pub fn completion_ranking<'a>(all_tickets: impl IntoIterator<Item = &'a Ticket>, categories: &StatusCategories) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for ticket in all_tickets {
        if categories.is_done(&ticket.status) {
            *counts.entry(ticket.assignee.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranking: Vec<_> = counts.into_iter().map(|(person, count)| (person.to_string(), count)).collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking
}

/// Compute `person`'s stats and team rank.
///
/// Pass the complete ticket set: individual performance is judged team-wide, independent of any
/// dashboard filter. An unknown person yields all-zero stats with no rank.
#[must_use]
pub fn individual_stats(all_tickets: &[Ticket], person: &str, categories: &StatusCategories) -> PersonStats {
    let mine: Vec<&Ticket> = all_tickets.iter().filter(|t| t.assignee == person).collect();

    let total = mine.len() as u64;
    let mut completed = 0;
    let mut in_progress = 0;
    for ticket in &mine {
        match categories.classify(&ticket.status) {
            Some(StatusCategory::Done) => completed += 1,
            Some(StatusCategory::InProgress) => in_progress += 1,
            Some(StatusCategory::Todo) | None => {}
        }
    }

    let rank = completion_ranking(all_tickets, categories)
        .iter()
        .position(|(name, _)| name == person)
        .map(|index| index + 1);

    PersonStats {
        person: person.to_string(),
        total,
        completed,
        in_progress,
        efficiency: round1(percentage(completed, total)),
        avg_resolution_days: mean_resolution_days(mine.iter().copied()),
        rank,
    }
}
