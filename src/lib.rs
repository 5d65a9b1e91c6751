#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Metrics engine for issue-tracker dashboards
//!
//! This library loads a CSV export of issue-tracker tickets, narrows it with a user filter
//! selection, and computes the numbers a team dashboard displays: KPI cards, a leaderboard,
//! grouped distributions, weekly trends, and per-person statistics.
//!
//! # Module Organization
//!
//! - [`tickets`]: Ticket model and CSV loading/normalization
//! - [`filter`]: Filter selections and the filter engine
//! - [`metrics`]: Aggregations over a (filtered) ticket collection
//! - [`ranking`]: Individual statistics, team rank and comparisons
//! - [`dashboard`]: One-pass computation of every filtered view
//! - [`config`]: TOML configuration
//! - [`reports`]: JSON and CSV export
//!
//! # Example
//!
//! ```no_run
//! use ticket_metrics::config::Config;
//! use ticket_metrics::dashboard::DashboardSnapshot;
//! use ticket_metrics::filter::{FilterOptions, FilterSelection};
//! use ticket_metrics::tickets::{SourceResult, load_csv_file};
//!
//! # fn main() -> ticket_metrics::Result<()> {
//! let config = Config::default();
//! let SourceResult::Found(tickets) = load_csv_file(&config.data_paths, &config.date_format)? else {
//!     println!("No data available");
//!     return Ok(());
//! };
//!
//! let options = FilterOptions::from_tickets(&tickets);
//! let selection = FilterSelection::select_all(&options, chrono::Local::now().date_naive());
//! let snapshot = DashboardSnapshot::build(&tickets, &selection, &config);
//! println!("{} of {} tickets completed", snapshot.kpis.completed, snapshot.kpis.total);
//! # Ok(())
//! # }
//! ```

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;
pub mod dashboard;
pub mod filter;
pub mod metrics;
pub mod ranking;
pub mod reports;
pub mod tickets;
