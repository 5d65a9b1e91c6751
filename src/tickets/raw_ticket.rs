use serde::{Deserialize, Serialize};

/// One row of an issue-tracker export, exactly as it appears in the source table.
///
/// Every field is optional. Columns not listed here are ignored when deserializing, and
/// empty cells deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTicket {
    #[serde(rename = "Issue key", default)]
    pub key: Option<String>,

    #[serde(rename = "Summary", default)]
    pub summary: Option<String>,

    #[serde(rename = "Assignee", default)]
    pub assignee: Option<String>,

    #[serde(rename = "Reporter", default)]
    pub reporter: Option<String>,

    #[serde(rename = "Status", default)]
    pub status: Option<String>,

    #[serde(rename = "Priority", default)]
    pub priority: Option<String>,

    #[serde(rename = "Issue Type", default)]
    pub issue_type: Option<String>,

    #[serde(rename = "Created", default)]
    pub created: Option<String>,

    #[serde(rename = "Updated", default)]
    pub updated: Option<String>,

    #[serde(rename = "Resolved", default)]
    pub resolved: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_columns() {
        let data = "Issue key,Summary,Sprint,Status\nABC-1,Fix login,Sprint 4,Done\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: RawTicket = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(row.key.as_deref(), Some("ABC-1"));
        assert_eq!(row.summary.as_deref(), Some("Fix login"));
        assert_eq!(row.status.as_deref(), Some("Done"));
        assert_eq!(row.assignee, None);
    }

    #[test]
    fn test_deserialize_empty_cells_are_none() {
        let data = "Issue key,Assignee,Priority\nABC-2,,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: RawTicket = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(row.key.as_deref(), Some("ABC-2"));
        assert_eq!(row.assignee, None);
        assert_eq!(row.priority, None);
    }
}
