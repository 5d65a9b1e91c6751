use crate::Result;
use crate::dashboard::DashboardSnapshot;
use crate::tickets::{Ticket, format_timestamp};
use chrono::NaiveDateTime;
use core::fmt::Write;
use std::borrow::Cow;

/// Write the leaderboard of `snapshot` as a CSV table.
pub fn generate<W: Write>(snapshot: &DashboardSnapshot, writer: &mut W) -> Result<()> {
    writeln!(writer, "Rank,Assignee,Total,Completed,Efficiency")?;
    for (index, row) in snapshot.leaderboard.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{},{},{:.1}",
            index + 1,
            escape_csv(&row.assignee),
            row.total,
            row.completed,
            row.efficiency
        )?;
    }

    Ok(())
}

/// Write the detailed ticket view as a CSV table.
///
/// Timestamps are printed with `date_format`, so the output reads like the source export.
/// Absent values are left empty.
pub fn generate_tickets<'a, W: Write>(tickets: impl IntoIterator<Item = &'a Ticket>, date_format: &str, writer: &mut W) -> Result<()> {
    let timestamp = |ts: Option<NaiveDateTime>| ts.map(|ts| format_timestamp(&ts, date_format)).unwrap_or_default();

    writeln!(writer, "Issue key,Summary,Assignee,Status,Priority,Issue Type,Created,Updated")?;
    for ticket in tickets {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            escape_csv(&ticket.key),
            escape_csv(&ticket.summary),
            escape_csv(&ticket.assignee),
            escape_csv(&ticket.status),
            escape_csv(&ticket.priority),
            escape_csv(&ticket.issue_type),
            escape_csv(&timestamp(ticket.created_at)),
            escape_csv(&timestamp(ticket.updated_at)),
        )?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
