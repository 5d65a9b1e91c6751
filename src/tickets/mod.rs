//! Ticket records and their loading from issue-tracker CSV exports
//!
//! Raw rows are deserialized into [`RawTicket`] values and normalized into [`Ticket`] records:
//! missing categorical fields receive defaults, timestamps are parsed with a fixed textual
//! format, and derived fields (resolution days, ISO week, month name) are computed once.
//!
//! Loading never fails on bad cell content. An unparseable date simply becomes absent, along
//! with everything derived from it. Only structural problems with the CSV stream itself, or
//! I/O failures on a file that exists, are reported as errors.

mod loader;
mod raw_ticket;
mod source_result;
mod ticket;
mod timestamp;

pub use loader::{load, load_csv, load_csv_file, load_with_format};
pub use raw_ticket::RawTicket;
pub use source_result::SourceResult;
pub use ticket::{
    DEFAULT_ASSIGNEE, DEFAULT_ISSUE_TYPE, DEFAULT_PRIORITY, DEFAULT_REPORTER, DEFAULT_STATUS, Ticket,
};
pub use timestamp::{DEFAULT_DATE_FORMAT, format_timestamp, parse_timestamp};
