use super::StatusCategories;
use crate::tickets::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    /// ISO week number of the creation date.
    pub week: u32,

    /// Tickets created in this week.
    pub created_count: u64,

    /// Tickets created in this week that are now in a done status.
    pub resolved_count: u64,
}

/// Created and resolved counts per creation week, in ascending week order.
///
/// Weeks are ISO week numbers only, so the same week number from different years is merged.
/// Tickets without a creation timestamp are skipped.
#[must_use]
pub fn weekly_trend<'a>(tickets: impl IntoIterator<Item = &'a Ticket>, categories: &StatusCategories) -> Vec<WeeklyTrendPoint> {
    let mut weeks: BTreeMap<u32, WeeklyTrendPoint> = BTreeMap::new();

    for ticket in tickets {
        let Some(week) = ticket.created_week else {
            continue;
        };

        let point = weeks.entry(week).or_insert(WeeklyTrendPoint {
            week,
            created_count: 0,
            resolved_count: 0,
        });
        point.created_count += 1;
        if categories.is_done(&ticket.status) {
            point.resolved_count += 1;
        }
    }

    weeks.into_values().collect()
}
