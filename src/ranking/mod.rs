//! Per-person statistics, team rank and comparison
//!
//! Unlike the dashboard views, everything here is meant to be computed over the complete ticket
//! set: a person's standing does not change with the active dashboard filter.

mod comparison;
mod person_activity;
mod person_stats;

pub use comparison::{Comparison, compare};
pub use person_activity::{activity_timeline, person_status_breakdown, recent_tickets};
pub use person_stats::{PersonStats, completion_ranking, individual_stats};
