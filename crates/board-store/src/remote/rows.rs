//! Row types for the remote tables.
//!
//! Columns are snake_case (`start_date`, `story_points`, `sprint_id`);
//! the wire models are camelCase. These structs are the single place where
//! that translation happens, in both directions.

use board_core::{
    Comment, Issue, IssuePriority, IssueStatus, IssueType, Project, Sprint, SprintState,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Projection used when only primary keys are needed.
#[derive(Debug, Deserialize)]
pub struct IdRow {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
}

impl From<Project> for ProjectRow {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            key: p.key,
            name: p.name,
            description: p.description,
        }
    }
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
        Self {
            id: r.id,
            key: r.key,
            name: r.name,
            description: r.description,
        }
    }
}

/// The users table has a single text primary key: the name itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRow {
    pub name: String,
}

impl From<String> for UserRow {
    fn from(name: String) -> Self {
        Self { name }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SprintRow {
    pub id: String,
    pub name: String,
    pub goal: String,
    pub state: SprintState,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Sprint> for SprintRow {
    fn from(s: &Sprint) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            goal: s.goal.clone(),
            state: s.state,
            start_date: s.start_date,
            end_date: s.end_date,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl From<SprintRow> for Sprint {
    fn from(r: SprintRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            goal: r.goal,
            state: r.state,
            start_date: r.start_date,
            end_date: r.end_date,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Columns touched by a sprint update; the primary key is never patched.
#[derive(Debug, Serialize)]
pub struct SprintChanges {
    pub name: String,
    pub goal: String,
    pub state: SprintState,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl From<&Sprint> for SprintChanges {
    fn from(s: &Sprint) -> Self {
        Self {
            name: s.name.clone(),
            goal: s.goal.clone(),
            state: s.state,
            start_date: s.start_date,
            end_date: s.end_date,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IssueRow {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub assignee: String,
    pub reporter: String,
    pub labels: Vec<String>,
    pub story_points: f64,
    pub sprint_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Issue> for IssueRow {
    fn from(i: &Issue) -> Self {
        Self {
            id: i.id.clone(),
            title: i.title.clone(),
            description: i.description.clone(),
            issue_type: i.issue_type,
            status: i.status,
            priority: i.priority,
            assignee: i.assignee.clone(),
            reporter: i.reporter.clone(),
            labels: i.labels.clone(),
            story_points: i.story_points,
            sprint_id: i.sprint_id.clone(),
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

impl From<IssueRow> for Issue {
    fn from(r: IssueRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            issue_type: r.issue_type,
            status: r.status,
            priority: r.priority,
            assignee: r.assignee,
            reporter: r.reporter,
            labels: r.labels,
            story_points: r.story_points,
            sprint_id: r.sprint_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Columns touched by an issue update; the primary key is never patched.
#[derive(Debug, Serialize)]
pub struct IssueChanges {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub assignee: String,
    pub reporter: String,
    pub labels: Vec<String>,
    pub story_points: f64,
    pub sprint_id: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&Issue> for IssueChanges {
    fn from(i: &Issue) -> Self {
        Self {
            title: i.title.clone(),
            description: i.description.clone(),
            issue_type: i.issue_type,
            status: i.status,
            priority: i.priority,
            assignee: i.assignee.clone(),
            reporter: i.reporter.clone(),
            labels: i.labels.clone(),
            story_points: i.story_points,
            sprint_id: i.sprint_id.clone(),
            updated_at: i.updated_at,
        }
    }
}

/// Patch that clears the sprint reference on every matched issue.
#[derive(Debug, Serialize)]
pub struct IssueDetachment {
    pub sprint_id: String,
    pub updated_at: DateTime<Utc>,
}

impl IssueDetachment {
    pub fn now() -> Self {
        Self {
            sprint_id: String::new(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentRow {
    pub id: String,
    pub issue_id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentRow {
    fn from(c: &Comment) -> Self {
        Self {
            id: c.id.clone(),
            issue_id: c.issue_id.clone(),
            author: c.author.clone(),
            body: c.body.clone(),
            created_at: c.created_at,
        }
    }
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Self {
            id: r.id,
            issue_id: r.issue_id,
            author: r.author,
            body: r.body,
            created_at: r.created_at,
        }
    }
}
