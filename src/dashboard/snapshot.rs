use crate::config::Config;
use crate::filter::{FilterSelection, apply};
use crate::metrics::{
    ActivityHeatmap, Distribution, Kpis, LeaderboardRow, TicketField, WeeklyTrendPoint, WorkloadRow, activity_heatmap, distribution, kpis,
    leaderboard, resolution_histogram, weekly_trend, workload,
};
use crate::tickets::Ticket;
use serde::Serialize;
use std::time::Instant;

const LOG_TARGET: &str = " dashboard";

/// Every number the dashboard shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Tickets in the loaded collection.
    pub total_count: u64,

    /// Tickets that passed the selection.
    pub filtered_count: u64,

    pub kpis: Kpis,
    pub leaderboard: Vec<LeaderboardRow>,
    pub workload: Vec<WorkloadRow>,
    pub status_distribution: Distribution,
    pub priority_distribution: Distribution,
    pub issue_type_distribution: Distribution,
    pub reporter_distribution: Distribution,

    /// The most active reporters, limited to the configured count.
    pub top_reporters: Vec<(String, u64)>,

    pub weekly_trend: Vec<WeeklyTrendPoint>,

    /// Resolution days of every filtered ticket that has one, for a histogram.
    pub resolution_days: Vec<i64>,

    pub heatmap: ActivityHeatmap,
}

impl DashboardSnapshot {
    /// Filter `tickets` with `selection` and compute every view over the result.
    ///
    /// An empty collection, or a selection that matches nothing, yields a snapshot of zeros
    /// and empty lists.
    #[must_use]
    pub fn build(tickets: &[Ticket], selection: &FilterSelection, config: &Config) -> Self {
        let start = Instant::now();
        let categories = config.status_categories();

        let filtered = apply(tickets, selection);
        let reporter_distribution = distribution(filtered.iter().copied(), TicketField::Reporter);
        let top_reporters = reporter_distribution
            .top(config.reporter_top_n)
            .into_iter()
            .map(|(reporter, count)| (reporter.to_string(), count))
            .collect();

        let snapshot = Self {
            total_count: tickets.len() as u64,
            filtered_count: filtered.len() as u64,
            kpis: kpis(filtered.iter().copied(), &categories),
            leaderboard: leaderboard(filtered.iter().copied(), &categories),
            workload: workload(filtered.iter().copied(), &categories),
            status_distribution: distribution(filtered.iter().copied(), TicketField::Status),
            priority_distribution: distribution(filtered.iter().copied(), TicketField::Priority),
            issue_type_distribution: distribution(filtered.iter().copied(), TicketField::IssueType),
            reporter_distribution,
            top_reporters,
            weekly_trend: weekly_trend(filtered.iter().copied(), &categories),
            resolution_days: resolution_histogram(filtered.iter().copied()),
            heatmap: activity_heatmap(filtered.iter().copied()),
        };

        log::debug!(
            target: LOG_TARGET,
            "Built dashboard for {} of {} ticket(s) in {:.3}s",
            snapshot.filtered_count,
            snapshot.total_count,
            start.elapsed().as_secs_f64()
        );

        snapshot
    }

    /// Whether the selection matched no tickets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}
