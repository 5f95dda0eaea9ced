//! The whole-project document the local provider reads and writes as one
//! unit. Its JSON layout matches the wire format (camelCase), so the file
//! on disk doubles as a readable export of the board.

use crate::seed;

use board_core::{Comment, DEFAULT_USERS, Issue, Project, Sprint, record_participant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Next issue number to hand out; strictly increasing, never reused
    pub issue_counter: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub meta: Meta,
    pub project: Project,
    pub users: Vec<String>,
    pub sprints: Vec<Sprint>,
    pub issues: Vec<Issue>,
    pub comments: Vec<Comment>,
}

impl Snapshot {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Snapshot {
            meta: Meta {
                created_at: now,
                updated_at: now,
                issue_counter: seed::SEED_ISSUE_COUNTER,
            },
            project: seed::project(),
            users: seed::users(),
            sprints: seed::sprints(now),
            issues: seed::issues(now),
            comments: seed::comments(now),
        }
    }

    /// Recompute the user set as the default roster, then everything already
    /// stored, then every assignee/reporter on issues. Order-preserving and
    /// purely additive: names recorded from comments stay. Returns whether
    /// the stored list changed.
    pub fn normalize_users(&mut self) -> bool {
        let mut normalized: Vec<String> = DEFAULT_USERS.iter().map(|u| u.to_string()).collect();
        for user in &self.users {
            record_participant(&mut normalized, user);
        }
        for issue in &self.issues {
            record_participant(&mut normalized, &issue.assignee);
            record_participant(&mut normalized, &issue.reporter);
        }

        if normalized != self.users {
            self.users = normalized;
            true
        } else {
            false
        }
    }

    /// All comments on `issue_id`, newest first.
    pub fn comments_for(&self, issue_id: &str) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.issue_id == issue_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }
}
