use super::RawTicket;
use super::timestamp::parse_timestamp;
use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ASSIGNEE: &str = "Unassigned";
pub const DEFAULT_REPORTER: &str = "Unknown";
pub const DEFAULT_STATUS: &str = "Unknown";
pub const DEFAULT_PRIORITY: &str = "Medium";
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

const SECONDS_PER_DAY: i64 = 86_400;

/// A normalized issue-tracker ticket.
///
/// Categorical fields always hold a value once normalized. Timestamps that could not be parsed
/// are `None`, as is every field derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub key: String,
    pub summary: String,
    pub assignee: String,
    pub reporter: String,
    pub status: String,
    pub priority: String,
    pub issue_type: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub resolved_at: Option<NaiveDateTime>,

    /// Whole days between creation and resolution, rounded down. Negative when the resolution
    /// timestamp precedes the creation timestamp, so a span of minus twelve hours is -1.
    pub resolution_days: Option<i64>,

    /// ISO 8601 week number of the creation date.
    pub created_week: Option<u32>,

    /// Full English month name of the creation date.
    pub created_month: Option<String>,
}

impl Ticket {
    /// Normalize a raw row, parsing timestamps with `date_format`.
    #[must_use]
    pub fn from_raw(raw: RawTicket, date_format: &str) -> Self {
        let parse = |cell: Option<&str>| cell.and_then(|text| parse_timestamp(text, date_format));

        let created_at = parse(raw.created.as_deref());
        let updated_at = parse(raw.updated.as_deref());
        let resolved_at = parse(raw.resolved.as_deref());

        Self::new(
            raw.key.unwrap_or_default(),
            raw.summary.unwrap_or_default(),
            or_default(raw.assignee, DEFAULT_ASSIGNEE),
            or_default(raw.reporter, DEFAULT_REPORTER),
            or_default(raw.status, DEFAULT_STATUS),
            or_default(raw.priority, DEFAULT_PRIORITY),
            or_default(raw.issue_type, DEFAULT_ISSUE_TYPE),
            created_at,
            updated_at,
            resolved_at,
        )
    }

    /// Build a ticket from already-normalized values, computing the derived fields.
    #[must_use]
    #[expect(clippy::too_many_arguments, reason = "Mirrors the columns of the source table")]
    pub fn new(
        key: String,
        summary: String,
        assignee: String,
        reporter: String,
        status: String,
        priority: String,
        issue_type: String,
        created_at: Option<NaiveDateTime>,
        updated_at: Option<NaiveDateTime>,
        resolved_at: Option<NaiveDateTime>,
    ) -> Self {
        let resolution_days = match (created_at, resolved_at) {
            (Some(created), Some(resolved)) => Some((resolved - created).num_seconds().div_euclid(SECONDS_PER_DAY)),
            _ => None,
        };

        let created_week = created_at.map(|ts| ts.iso_week().week());
        let created_month = created_at
            .and_then(|ts| u8::try_from(ts.month()).ok())
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string());

        Self {
            key,
            summary,
            assignee,
            reporter,
            status,
            priority,
            issue_type,
            created_at,
            updated_at,
            resolved_at,
            resolution_days,
            created_week,
            created_month,
        }
    }

    #[must_use]
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at.map(|ts| ts.date())
    }

    #[must_use]
    pub fn created_weekday(&self) -> Option<Weekday> {
        self.created_at.map(|ts| ts.weekday())
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}
