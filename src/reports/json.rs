use super::common;
use crate::Result;
use crate::dashboard::DashboardSnapshot;
use core::fmt::Write;
use serde_json::json;

/// Write the whole snapshot as pretty-printed JSON.
///
/// A `summary` object carries the KPI cards formatted for display next to the raw values.
pub fn generate<W: Write>(snapshot: &DashboardSnapshot, writer: &mut W) -> Result<()> {
    let mut output = serde_json::to_value(snapshot)?;

    if let Some(object) = output.as_object_mut() {
        let _ = object.insert(
            "summary".to_string(),
            json!({
                "completion_rate": common::format_percentage(snapshot.kpis.completion_rate),
                "avg_resolution": common::format_days(snapshot.kpis.avg_resolution_days),
            }),
        );
    }

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
