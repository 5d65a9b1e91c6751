use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Statuses that count as completed work.
pub const DONE_STATUSES: [&str; 4] = ["Done", "Resolved", "Closed", "Completed"];

/// Statuses that count as active work.
pub const IN_PROGRESS_STATUSES: [&str; 2] = ["In Progress", "In Review"];

/// Statuses that count as backlog.
pub const TODO_STATUSES: [&str; 3] = ["To Do", "Idea", "Open"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum StatusCategory {
    Done,
    #[strum(serialize = "In Progress")]
    InProgress,
    #[strum(serialize = "To Do")]
    Todo,
}

/// The status names that make up each [`StatusCategory`].
///
/// Matching is exact and case-sensitive. A status listed in no category still counts toward
/// totals but toward no category bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCategories {
    pub done: Vec<String>,
    pub in_progress: Vec<String>,
    pub todo: Vec<String>,
}

impl StatusCategories {
    #[must_use]
    pub fn classify(&self, status: &str) -> Option<StatusCategory> {
        if self.is_done(status) {
            Some(StatusCategory::Done)
        } else if self.in_progress.iter().any(|s| s == status) {
            Some(StatusCategory::InProgress)
        } else if self.todo.iter().any(|s| s == status) {
            Some(StatusCategory::Todo)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_done(&self, status: &str) -> bool {
        self.done.iter().any(|s| s == status)
    }

    #[must_use]
    pub fn statuses(&self, category: StatusCategory) -> &[String] {
        match category {
            StatusCategory::Done => &self.done,
            StatusCategory::InProgress => &self.in_progress,
            StatusCategory::Todo => &self.todo,
        }
    }
}

impl Default for StatusCategories {
    fn default() -> Self {
        let owned = |statuses: &[&str]| statuses.iter().map(|s| (*s).to_string()).collect();

        Self {
            done: owned(&DONE_STATUSES),
            in_progress: owned(&IN_PROGRESS_STATUSES),
            todo: owned(&TODO_STATUSES),
        }
    }
}
