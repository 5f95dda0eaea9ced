//! Local snapshot-file provider.
//!
//! Every operation is a full read of the document followed (for mutations)
//! by a full overwrite. There is no file locking: concurrent writers race
//! and the last write wins, which is adequate for the single-user tool this
//! backs. A read lazily seeds the file when it does not exist yet and
//! writes back the normalized user set when it drifted.

use crate::error::{Result, StoreError};
use crate::ids;
use crate::snapshot::Snapshot;
use crate::store::{BoardStore, IssueRemoval, Provider, SprintRemoval};

use board_core::{
    Comment, IssueFilter, IssuePatch, IssueWithComments, NewComment, NewIssue, NewSprint, Project,
    Sprint, SprintPatch, record_participant,
};

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the whole snapshot, seeding the file on first use.
    fn read(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            let mut snapshot = Snapshot::seeded(Utc::now());
            self.write(&mut snapshot)?;
            info!("Seeded snapshot at {}", self.path.display());
            return Ok(snapshot);
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let mut snapshot: Snapshot =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                source: e,
            })?;

        if snapshot.normalize_users() {
            debug!("User set drifted; writing back normalized snapshot");
            self.write(&mut snapshot)?;
        }

        Ok(snapshot)
    }

    /// Overwrite the whole snapshot, stamping its `updatedAt`.
    fn write(&self, snapshot: &mut Snapshot) -> Result<()> {
        snapshot.meta.updated_at = Utc::now();

        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let body = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StoreError::backend("encode snapshot", e.to_string()))?;
        std::fs::write(&self.path, body).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[async_trait]
impl BoardStore for FileStore {
    fn provider(&self) -> Provider {
        Provider::LocalFile
    }

    async fn project(&self) -> Result<Project> {
        Ok(self.read()?.project)
    }

    async fn users(&self) -> Result<Vec<String>> {
        Ok(self.read()?.users)
    }

    async fn list_sprints(&self) -> Result<Vec<Sprint>> {
        let mut sprints = self.read()?.sprints;
        sprints.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(sprints)
    }

    async fn create_sprint(&self, draft: NewSprint) -> Result<Sprint> {
        draft.validate()?;

        let mut snapshot = self.read()?;
        let now = Utc::now();

        let taken: Vec<String> = snapshot.sprints.iter().map(|s| s.id.clone()).collect();
        let id = ids::sprint_id(now.timestamp_millis(), &taken);
        let sprint = draft.build(id, now)?;

        snapshot.sprints.push(sprint.clone());
        self.write(&mut snapshot)?;

        info!("Created sprint {} ({})", sprint.id, sprint.name);
        Ok(sprint)
    }

    async fn update_sprint(&self, id: &str, patch: SprintPatch) -> Result<Sprint> {
        let mut snapshot = self.read()?;

        let sprint = snapshot
            .sprints
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Sprint", id))?;
        patch.apply(sprint, Utc::now())?;
        let updated = sprint.clone();

        self.write(&mut snapshot)?;

        info!("Updated sprint {}", updated.id);
        Ok(updated)
    }

    async fn delete_sprint(&self, id: &str) -> Result<SprintRemoval> {
        let mut snapshot = self.read()?;

        let index = snapshot
            .sprints
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Sprint", id))?;
        let removed = snapshot.sprints.remove(index);

        // Detach, never delete, the issues that referenced the sprint
        let now = Utc::now();
        let mut affected_issues = 0;
        for issue in &mut snapshot.issues {
            if issue.sprint_id == removed.id {
                issue.sprint_id = String::new();
                issue.updated_at = now;
                affected_issues += 1;
            }
        }

        self.write(&mut snapshot)?;

        info!(
            "Deleted sprint {}, detached {} issue(s)",
            removed.id, affected_issues
        );
        Ok(SprintRemoval {
            removed_sprint_id: removed.id,
            affected_issues,
        })
    }

    async fn list_issues(&self, filter: IssueFilter) -> Result<Vec<IssueWithComments>> {
        let snapshot = self.read()?;

        let mut issues: Vec<_> = snapshot
            .issues
            .iter()
            .filter(|issue| filter.matches(issue))
            .cloned()
            .collect();
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(issues
            .into_iter()
            .map(|issue| {
                let comments = snapshot.comments_for(&issue.id);
                IssueWithComments { issue, comments }
            })
            .collect())
    }

    async fn get_issue(&self, id: &str) -> Result<IssueWithComments> {
        let snapshot = self.read()?;

        let issue = snapshot
            .issues
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Issue", id))?;
        let comments = snapshot.comments_for(&issue.id);

        Ok(IssueWithComments { issue, comments })
    }

    async fn create_issue(&self, draft: NewIssue) -> Result<IssueWithComments> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(StoreError::validation(errors));
        }

        let mut snapshot = self.read()?;
        let now = Utc::now();

        // Counter strategy: the next number lives in the snapshot metadata
        let id = ids::issue_id(&snapshot.project.key, snapshot.meta.issue_counter);
        snapshot.meta.issue_counter += 1;

        let issue = draft.into_issue(id, now)?;
        record_participant(&mut snapshot.users, &issue.assignee);
        record_participant(&mut snapshot.users, &issue.reporter);
        snapshot.issues.push(issue.clone());

        self.write(&mut snapshot)?;

        info!("Created issue {} ({})", issue.id, issue.title);
        Ok(IssueWithComments {
            issue,
            comments: Vec::new(),
        })
    }

    async fn update_issue(&self, id: &str, patch: IssuePatch) -> Result<IssueWithComments> {
        let errors = patch.validate();
        if !errors.is_empty() {
            return Err(StoreError::validation(errors));
        }

        let mut snapshot = self.read()?;

        let issue = snapshot
            .issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("Issue", id))?;
        patch.apply(issue, Utc::now())?;
        let updated = issue.clone();

        record_participant(&mut snapshot.users, &updated.assignee);
        record_participant(&mut snapshot.users, &updated.reporter);

        self.write(&mut snapshot)?;

        info!("Updated issue {}", updated.id);
        let comments = snapshot.comments_for(&updated.id);
        Ok(IssueWithComments {
            issue: updated,
            comments,
        })
    }

    async fn delete_issue(&self, id: &str) -> Result<IssueRemoval> {
        let mut snapshot = self.read()?;

        let index = snapshot
            .issues
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("Issue", id))?;
        let removed = snapshot.issues.remove(index);

        let before = snapshot.comments.len();
        snapshot.comments.retain(|c| c.issue_id != removed.id);
        let dropped = before - snapshot.comments.len();

        self.write(&mut snapshot)?;

        info!("Deleted issue {}, dropped {} comment(s)", removed.id, dropped);
        Ok(IssueRemoval {
            removed_id: removed.id,
        })
    }

    async fn add_comment(&self, issue_id: &str, draft: NewComment) -> Result<Comment> {
        draft.validate()?;

        let mut snapshot = self.read()?;

        if !snapshot.issues.iter().any(|i| i.id == issue_id) {
            return Err(StoreError::not_found("Issue", issue_id));
        }

        let now = Utc::now();
        let taken: Vec<String> = snapshot.comments.iter().map(|c| c.id.clone()).collect();
        let id = ids::comment_id(now.timestamp_millis(), &taken);
        let comment = draft.build(id, issue_id.to_string(), now)?;

        record_participant(&mut snapshot.users, &comment.author);
        snapshot.comments.push(comment.clone());

        self.write(&mut snapshot)?;

        info!("Added comment {} to issue {}", comment.id, issue_id);
        Ok(comment)
    }
}
