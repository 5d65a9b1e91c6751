//! Aggregations over a ticket collection
//!
//! Every function here takes a borrowed, possibly filtered, collection and returns a fresh value
//! object. Nothing is cached; callers recompute per query. An empty collection always produces a
//! zero or empty result, never an error.
//!
//! Status-based counts go through [`StatusCategories`], which defaults to the exported
//! [`DONE_STATUSES`], [`IN_PROGRESS_STATUSES`] and [`TODO_STATUSES`] lists.

mod distribution;
mod heatmap;
mod kpis;
mod leaderboard;
mod percentage;
mod resolution;
mod status_category;
mod weekly_trend;

pub use distribution::{Distribution, TicketField, distribution};
pub use heatmap::{ActivityHeatmap, HeatmapCell, WEEKDAYS, activity_heatmap, weekday_name};
pub use kpis::{Kpis, kpis};
pub use leaderboard::{LeaderboardRow, WorkloadRow, leaderboard, workload};
pub use percentage::{percentage, round1};
pub use resolution::{mean_resolution_days, resolution_histogram};
pub use status_category::{DONE_STATUSES, IN_PROGRESS_STATUSES, StatusCategories, StatusCategory, TODO_STATUSES};
pub use weekly_trend::{WeeklyTrendPoint, weekly_trend};
