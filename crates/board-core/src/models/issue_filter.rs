use crate::models::issue::Issue;

use serde::Deserialize;

/// Query parameters for listing issues. Every field is optional; present
/// fields are combined with AND. The multi-value fields accept a
/// comma-separated list meaning "any of".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub sprint_id: Option<String>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = &self.status {
            let wanted = split_list(status);
            if !wanted.is_empty() && !wanted.iter().any(|s| s == issue.status.as_str()) {
                return false;
            }
        }

        if let Some(priority) = &self.priority {
            let wanted = split_list(priority);
            if !wanted.is_empty() && !wanted.iter().any(|p| p == issue.priority.as_str()) {
                return false;
            }
        }

        if let Some(issue_type) = &self.issue_type {
            let wanted = split_list(issue_type);
            if !wanted.is_empty() && !wanted.iter().any(|t| t == issue.issue_type.as_str()) {
                return false;
            }
        }

        // Assignee matching is case-insensitive
        if let Some(assignee) = &self.assignee {
            let wanted: Vec<String> = split_list(assignee)
                .into_iter()
                .map(|a| a.to_lowercase())
                .collect();
            if !wanted.is_empty() && !wanted.contains(&issue.assignee.to_lowercase()) {
                return false;
            }
        }

        if let Some(sprint_id) = &self.sprint_id {
            let wanted = split_list(sprint_id);
            if !wanted.is_empty() && !wanted.iter().any(|s| s == &issue.sprint_id) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let term = search.trim().to_lowercase();
            if !term.is_empty() && !self.haystack(issue).contains(&term) {
                return false;
            }
        }

        true
    }

    fn haystack(&self, issue: &Issue) -> String {
        [
            issue.id.as_str(),
            issue.title.as_str(),
            issue.description.as_str(),
            issue.assignee.as_str(),
            issue.reporter.as_str(),
            &issue.labels.join(" "),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Split a comma-separated value into trimmed, non-empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
