//! One-pass computation of every filtered dashboard view
//!
//! A dashboard interaction (a filter change, a search keystroke) maps to one call to
//! [`DashboardSnapshot::build`]: the selection is applied once and every view is derived from
//! the same filtered set.

mod snapshot;

pub use snapshot::DashboardSnapshot;
