//! Issue creation and partial-update payloads.
//!
//! Fields arrive as loose strings and are only promoted to typed enums once
//! validation has passed, so a bad value surfaces as an enumerable 400-style
//! message rather than a deserialization failure.

use crate::models::issue::Issue;
use crate::models::issue_filter::split_list;
use crate::models::users::{DEFAULT_REPORTER, UNASSIGNED};
use crate::{IssuePriority, IssueStatus, IssueType, Result as CoreResult};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const MIN_STORY_POINTS: f64 = 0.0;
pub const MAX_STORY_POINTS: f64 = 100.0;

const TITLE_REQUIRED: &str = "title is required";
const TYPE_INVALID: &str = "type must be one of: Story, Task, Bug, Epic";
const STATUS_INVALID: &str = "status must be one of: Backlog, To Do, In Progress, In Review, Done";
const PRIORITY_INVALID: &str = "priority must be one of: Lowest, Low, Medium, High, Highest";
const STORY_POINTS_INVALID: &str = "storyPoints must be a number between 0 and 100";

/// Labels are accepted either as a JSON list or as one comma-separated
/// string; both normalize to a trimmed, non-empty list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelsInput {
    List(Vec<String>),
    Csv(String),
}

impl LabelsInput {
    pub fn normalize(&self) -> Vec<String> {
        match self {
            LabelsInput::List(items) => items
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            LabelsInput::Csv(csv) => split_list(csv),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub status: String,
    pub priority: String,
    pub assignee: String,
    pub reporter: String,
    pub labels: Option<LabelsInput>,
    pub story_points: Option<f64>,
    pub sprint_id: String,
}

impl NewIssue {
    /// All validation problems with this payload, in field order.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(TITLE_REQUIRED.to_string());
        }
        if IssueType::from_str(&self.issue_type).is_err() {
            errors.push(TYPE_INVALID.to_string());
        }
        if IssueStatus::from_str(&self.status).is_err() {
            errors.push(STATUS_INVALID.to_string());
        }
        if IssuePriority::from_str(&self.priority).is_err() {
            errors.push(PRIORITY_INVALID.to_string());
        }
        if let Some(points) = self.story_points
            && !story_points_in_range(points)
        {
            errors.push(STORY_POINTS_INVALID.to_string());
        }

        errors
    }

    /// Build the issue once `validate` reported no problems. Blank assignee
    /// and reporter fall back to their sentinels here, not during validation.
    pub fn into_issue(self, id: String, now: DateTime<Utc>) -> CoreResult<Issue> {
        let assignee = non_blank_or(&self.assignee, UNASSIGNED);
        let reporter = non_blank_or(&self.reporter, DEFAULT_REPORTER);

        Ok(Issue {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            issue_type: IssueType::from_str(&self.issue_type)?,
            status: IssueStatus::from_str(&self.status)?,
            priority: IssuePriority::from_str(&self.priority)?,
            assignee,
            reporter,
            labels: self.labels.as_ref().map(LabelsInput::normalize).unwrap_or_default(),
            story_points: self.story_points.unwrap_or(0.0),
            sprint_id: self.sprint_id,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update. Absent fields leave the issue untouched; present fields
/// are re-validated with the same rules as creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub labels: Option<LabelsInput>,
    pub story_points: Option<f64>,
    pub sprint_id: Option<String>,
}

impl IssuePatch {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            errors.push(TITLE_REQUIRED.to_string());
        }
        if let Some(issue_type) = &self.issue_type
            && IssueType::from_str(issue_type).is_err()
        {
            errors.push(TYPE_INVALID.to_string());
        }
        if let Some(status) = &self.status
            && IssueStatus::from_str(status).is_err()
        {
            errors.push(STATUS_INVALID.to_string());
        }
        if let Some(priority) = &self.priority
            && IssuePriority::from_str(priority).is_err()
        {
            errors.push(PRIORITY_INVALID.to_string());
        }
        if let Some(points) = self.story_points
            && !story_points_in_range(points)
        {
            errors.push(STORY_POINTS_INVALID.to_string());
        }

        errors
    }

    /// Apply present fields and refresh `updated_at`. Call after `validate`.
    pub fn apply(self, issue: &mut Issue, now: DateTime<Utc>) -> CoreResult<()> {
        if let Some(title) = self.title {
            issue.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            issue.description = description.trim().to_string();
        }
        if let Some(issue_type) = self.issue_type {
            issue.issue_type = IssueType::from_str(&issue_type)?;
        }
        if let Some(status) = self.status {
            issue.status = IssueStatus::from_str(&status)?;
        }
        if let Some(priority) = self.priority {
            issue.priority = IssuePriority::from_str(&priority)?;
        }
        if let Some(assignee) = self.assignee {
            issue.assignee = assignee.trim().to_string();
        }
        if let Some(reporter) = self.reporter {
            issue.reporter = reporter.trim().to_string();
        }
        if let Some(labels) = self.labels {
            issue.labels = labels.normalize();
        }
        if let Some(points) = self.story_points {
            issue.story_points = points;
        }
        if let Some(sprint_id) = self.sprint_id {
            issue.sprint_id = sprint_id;
        }

        issue.updated_at = now;
        Ok(())
    }
}

fn story_points_in_range(points: f64) -> bool {
    points.is_finite() && (MIN_STORY_POINTS..=MAX_STORY_POINTS).contains(&points)
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
