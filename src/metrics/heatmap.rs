use crate::tickets::Ticket;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Days of the week in display order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day: Weekday,
    pub week: u32,
    pub count: u64,
}

/// Tickets created per (weekday, ISO week) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    /// Non-empty cells, ordered Monday first, then by week.
    cells: Vec<HeatmapCell>,
}

impl ActivityHeatmap {
    #[must_use]
    pub fn count(&self, day: Weekday, week: u32) -> u64 {
        self.cells
            .iter()
            .find(|cell| cell.day == day && cell.week == week)
            .map_or(0, |cell| cell.count)
    }

    #[must_use]
    pub fn cells(&self) -> &[HeatmapCell] {
        &self.cells
    }

    /// The weekdays that have at least one ticket, Monday first.
    #[must_use]
    pub fn days(&self) -> Vec<Weekday> {
        WEEKDAYS
            .into_iter()
            .filter(|day| self.cells.iter().any(|cell| cell.day == *day))
            .collect()
    }

    /// The weeks that have at least one ticket, ascending.
    #[must_use]
    pub fn weeks(&self) -> Vec<u32> {
        self.cells.iter().map(|cell| cell.week).collect::<BTreeSet<_>>().into_iter().collect()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|cell| cell.count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Full English name of a weekday, as shown on heatmap rows.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[must_use]
pub fn activity_heatmap<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> ActivityHeatmap {
    let mut counts: BTreeMap<(u32, u32), u64> = BTreeMap::new();

    for ticket in tickets {
        if let (Some(day), Some(week)) = (ticket.created_weekday(), ticket.created_week) {
            *counts.entry((day.num_days_from_monday(), week)).or_insert(0) += 1;
        }
    }

    let cells = counts
        .into_iter()
        .filter_map(|((day_index, week), count)| {
            let day = WEEKDAYS.get(usize::try_from(day_index).ok()?)?;
            Some(HeatmapCell { day: *day, week, count })
        })
        .collect();

    ActivityHeatmap { cells }
}
