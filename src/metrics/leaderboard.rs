use super::{StatusCategories, percentage, round1};
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One assignee's standing on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub assignee: String,
    pub total: u64,
    pub completed: u64,

    /// `completed / total * 100`, rounded to one decimal.
    pub efficiency: f64,
}

/// One assignee's share of the work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadRow {
    pub assignee: String,
    pub total: u64,
    pub completed: u64,
    pub remaining: u64,
}

#[derive(Default)]
struct Tally {
    total: u64,
    completed: u64,
}

/// Per-assignee totals in ascending assignee order.
fn tally_by_assignee<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, categories: &StatusCategories) -> BTreeMap<&'a str, Tally> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for ticket in tickets {
        let tally = tallies.entry(ticket.assignee.as_str()).or_default();
        tally.total += 1;
        if categories.is_done(&ticket.status) {
            tally.completed += 1;
        }
    }

    tallies
}

/// Assignees ranked by completed tickets, most first.
///
/// Rows start in ascending assignee order and are stably sorted by `completed`, so assignees
/// with equal completion counts keep that order.
#[must_use]
pub fn leaderboard<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, categories: &StatusCategories) -> Vec<LeaderboardRow> {
    let mut rows: Vec<_> = tally_by_assignee(tickets, categories)
        .into_iter()
        .map(|(assignee, tally)| LeaderboardRow {
            assignee: assignee.to_string(),
            total: tally.total,
            completed: tally.completed,
            efficiency: round1(percentage(tally.completed, tally.total)),
        })
        .collect();

    rows.sort_by(|a, b| b.completed.cmp(&a.completed));
    rows
}

/// Per-assignee workload, lightest first.
#[must_use]
pub fn workload<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, categories: &StatusCategories) -> Vec<WorkloadRow> {
    let mut rows: Vec<_> = tally_by_assignee(tickets, categories)
        .into_iter()
        .map(|(assignee, tally)| WorkloadRow {
            assignee: assignee.to_string(),
            total: tally.total,
            completed: tally.completed,
            remaining: tally.total - tally.completed,
        })
        .collect();

    rows.sort_by_key(|row| row.total);
    rows
}
