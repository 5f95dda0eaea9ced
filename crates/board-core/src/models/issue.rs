use crate::models::comment::Comment;
use crate::{IssuePriority, IssueStatus, IssueType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked unit of work. `sprint_id` is an empty string when the issue is
/// not planned into any sprint; `assignee` falls back to the "Unassigned"
/// sentinel rather than an absent field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub status: IssueStatus,
    pub priority: IssuePriority,

    // Assignment
    pub assignee: String,
    pub reporter: String,

    pub labels: Vec<String>,
    pub story_points: f64,
    pub sprint_id: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An issue as served to clients, with its comments attached in-line.
/// Comments are persisted independently and joined at read time.
#[derive(Debug, Clone, Serialize)]
pub struct IssueWithComments {
    #[serde(flatten)]
    pub issue: Issue,
    pub comments: Vec<Comment>,
}
