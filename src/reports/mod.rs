//! Export of dashboard results
//!
//! Generators write into any [`core::fmt::Write`] sink, so callers can target a `String`, a
//! file wrapper, or a download buffer alike.
//!
//! - **JSON**: the complete [`DashboardSnapshot`](crate::dashboard::DashboardSnapshot), for
//!   programmatic consumers
//! - **CSV**: the leaderboard, or the detailed ticket list, with RFC 4180 escaping
//!
//! The `format_*` helpers render values the way dashboard cards show them.

mod common;
mod csv;
mod json;

pub use common::{format_days, format_percentage, format_rank};
pub use csv::generate as generate_csv;
pub use csv::generate_tickets as generate_tickets_csv;
pub use json::generate as generate_json;
