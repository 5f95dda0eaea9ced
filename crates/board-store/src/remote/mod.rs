//! Remote table-store provider.
//!
//! The same logical operations as the file provider, decomposed into
//! per-entity queries against five relational tables (`projects`, `users`,
//! `sprints`, `issues`, `comments`) reached over a PostgREST-style HTTP
//! API. Rows use snake_case column names; translation to and from the
//! camelCase wire models lives in `rows`.
//!
//! Seeding is idempotent (insert-or-skip keyed by primary key) and runs at
//! most once per process, guarded by a `OnceCell` so concurrent first
//! requests cannot double-seed. A failed seeding attempt is not cached and
//! is retried by the next request.

pub mod client;
pub mod rows;

use crate::error::{Result, StoreError};
use crate::ids;
use crate::seed;
use crate::store::{BoardStore, IssueRemoval, Provider, SprintRemoval};

use client::TableClient;
use rows::{
    CommentRow, IdRow, IssueChanges, IssueDetachment, IssueRow, ProjectRow, SprintChanges,
    SprintRow, UserRow,
};

use board_core::{
    Comment, DEFAULT_USERS, Issue, IssueFilter, IssuePatch, IssueWithComments, NewComment,
    NewIssue, NewSprint, Project, Sprint, SprintPatch, UNASSIGNED, record_participant,
};

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use tokio::sync::OnceCell;

pub struct RemoteStore {
    client: TableClient,
    seeded: OnceCell<()>,
}

impl RemoteStore {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            client: TableClient::new(base_url, service_key),
            seeded: OnceCell::new(),
        }
    }

    async fn ensure_seeded(&self) -> Result<()> {
        self.seeded
            .get_or_try_init(|| async {
                let now = Utc::now();

                self.client
                    .insert_or_skip("projects", &[ProjectRow::from(seed::project())])
                    .await?;

                let users: Vec<UserRow> = seed::users().into_iter().map(UserRow::from).collect();
                self.client.insert_or_skip("users", &users).await?;

                let sprints: Vec<SprintRow> =
                    seed::sprints(now).iter().map(SprintRow::from).collect();
                self.client.insert_or_skip("sprints", &sprints).await?;

                let issues: Vec<IssueRow> = seed::issues(now).iter().map(IssueRow::from).collect();
                self.client.insert_or_skip("issues", &issues).await?;

                let comments: Vec<CommentRow> =
                    seed::comments(now).iter().map(CommentRow::from).collect();
                self.client.insert_or_skip("comments", &comments).await?;

                info!("Remote tables seeded");
                Ok(())
            })
            .await
            .map(|_| ())
    }

    async fn project_row(&self) -> Result<ProjectRow> {
        let rows: Vec<ProjectRow> = self
            .client
            .select("projects", "*", &[("limit", "1".to_string())])
            .await?;
        rows.into_iter().next().ok_or_else(|| {
            StoreError::backend("select projects", "no project row; seeding incomplete")
        })
    }

    async fn fetch_issue(&self, id: &str) -> Result<Option<Issue>> {
        let rows: Vec<IssueRow> = self
            .client
            .select("issues", "*", &[("id", format!("eq.{id}"))])
            .await?;
        Ok(rows.into_iter().next().map(Issue::from))
    }

    /// All comments on `issue_id`, newest first.
    async fn fetch_comments(&self, issue_id: &str) -> Result<Vec<Comment>> {
        let rows: Vec<CommentRow> = self
            .client
            .select("comments", "*", &[("issue_id", format!("eq.{issue_id}"))])
            .await?;
        let mut comments: Vec<Comment> = rows.into_iter().map(Comment::from).collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    /// Insert-or-skip every non-sentinel name into the users table.
    async fn record_participants(&self, names: &[&str]) -> Result<()> {
        let rows: Vec<UserRow> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty() && *n != UNASSIGNED)
            .map(|n| UserRow::from(n.to_string()))
            .collect();
        if rows.is_empty() {
            return Ok(());
        }
        self.client.insert_or_skip("users", &rows).await
    }

    async fn taken_ids(&self, table: &str) -> Result<Vec<String>> {
        let rows: Vec<IdRow> = self.client.select(table, "id", &[]).await?;
        Ok(rows.into_iter().map(|r| r.id).collect())
    }
}

#[async_trait]
impl BoardStore for RemoteStore {
    fn provider(&self) -> Provider {
        Provider::RemoteTable
    }

    async fn project(&self) -> Result<Project> {
        self.ensure_seeded().await?;
        Ok(self.project_row().await?.into())
    }

    async fn users(&self) -> Result<Vec<String>> {
        self.ensure_seeded().await?;

        let rows: Vec<UserRow> = self.client.select("users", "*", &[]).await?;

        // Fixed default roster first, then everything else the table holds
        let mut users: Vec<String> = DEFAULT_USERS.iter().map(|u| u.to_string()).collect();
        for row in rows {
            record_participant(&mut users, &row.name);
        }
        Ok(users)
    }

    async fn list_sprints(&self) -> Result<Vec<Sprint>> {
        self.ensure_seeded().await?;

        let rows: Vec<SprintRow> = self.client.select("sprints", "*", &[]).await?;
        let mut sprints: Vec<Sprint> = rows.into_iter().map(Sprint::from).collect();
        sprints.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(sprints)
    }

    async fn create_sprint(&self, draft: NewSprint) -> Result<Sprint> {
        draft.validate()?;
        self.ensure_seeded().await?;

        let now = Utc::now();
        let taken = self.taken_ids("sprints").await?;
        let id = ids::sprint_id(now.timestamp_millis(), &taken);
        let sprint = draft.build(id, now)?;

        self.client
            .insert("sprints", &[SprintRow::from(&sprint)])
            .await?;

        info!("Created sprint {} ({})", sprint.id, sprint.name);
        Ok(sprint)
    }

    async fn update_sprint(&self, id: &str, patch: SprintPatch) -> Result<Sprint> {
        self.ensure_seeded().await?;

        let rows: Vec<SprintRow> = self
            .client
            .select("sprints", "*", &[("id", format!("eq.{id}"))])
            .await?;
        let mut sprint: Sprint = rows
            .into_iter()
            .next()
            .map(Sprint::from)
            .ok_or_else(|| StoreError::not_found("Sprint", id))?;

        patch.apply(&mut sprint, Utc::now())?;

        let updated: Vec<SprintRow> = self
            .client
            .update(
                "sprints",
                &[("id", format!("eq.{id}"))],
                &SprintChanges::from(&sprint),
            )
            .await?;
        let sprint = updated
            .into_iter()
            .next()
            .map(Sprint::from)
            .ok_or_else(|| StoreError::not_found("Sprint", id))?;

        info!("Updated sprint {}", sprint.id);
        Ok(sprint)
    }

    async fn delete_sprint(&self, id: &str) -> Result<SprintRemoval> {
        self.ensure_seeded().await?;

        let existing: Vec<IdRow> = self
            .client
            .select("sprints", "id", &[("id", format!("eq.{id}"))])
            .await?;
        if existing.is_empty() {
            return Err(StoreError::not_found("Sprint", id));
        }

        // Two-step saga: detach referencing issues, then drop the sprint.
        // No cross-statement atomicity; a crash in between leaves issues
        // detached and the sprint still present, visible on the next read.
        let detached: Vec<IdRow> = self
            .client
            .update(
                "issues",
                &[("sprint_id", format!("eq.{id}"))],
                &IssueDetachment::now(),
            )
            .await?;

        // The delete is idempotent, so one retry is safe
        let filters = [("id", format!("eq.{id}"))];
        if let Err(e) = self.client.delete("sprints", &filters).await {
            warn!("Sprint delete failed, retrying once: {}", e);
            self.client.delete("sprints", &filters).await?;
        }

        info!(
            "Deleted sprint {}, detached {} issue(s)",
            id,
            detached.len()
        );
        Ok(SprintRemoval {
            removed_sprint_id: id.to_string(),
            affected_issues: detached.len() as u64,
        })
    }

    async fn list_issues(&self, filter: IssueFilter) -> Result<Vec<IssueWithComments>> {
        self.ensure_seeded().await?;

        let issue_rows: Vec<IssueRow> = self.client.select("issues", "*", &[]).await?;
        let comment_rows: Vec<CommentRow> = self.client.select("comments", "*", &[]).await?;

        let mut by_issue: HashMap<String, Vec<Comment>> = HashMap::new();
        for comment in comment_rows.into_iter().map(Comment::from) {
            by_issue.entry(comment.issue_id.clone()).or_default().push(comment);
        }
        for comments in by_issue.values_mut() {
            comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }

        let mut issues: Vec<Issue> = issue_rows
            .into_iter()
            .map(Issue::from)
            .filter(|issue| filter.matches(issue))
            .collect();
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(issues
            .into_iter()
            .map(|issue| {
                let comments = by_issue.remove(&issue.id).unwrap_or_default();
                IssueWithComments { issue, comments }
            })
            .collect())
    }

    async fn get_issue(&self, id: &str) -> Result<IssueWithComments> {
        self.ensure_seeded().await?;

        let issue = self
            .fetch_issue(id)
            .await?
            .ok_or_else(|| StoreError::not_found("Issue", id))?;
        let comments = self.fetch_comments(id).await?;

        Ok(IssueWithComments { issue, comments })
    }

    async fn create_issue(&self, draft: NewIssue) -> Result<IssueWithComments> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(StoreError::validation(errors));
        }
        self.ensure_seeded().await?;

        let project = self.project_row().await?;

        // Max-scan strategy: one past the highest number already allocated
        let taken = self.taken_ids("issues").await?;
        let number = ids::next_issue_number(&project.key, taken.iter().map(String::as_str));
        let id = ids::issue_id(&project.key, number);

        let issue = draft.into_issue(id, Utc::now())?;
        self.client.insert("issues", &[IssueRow::from(&issue)]).await?;
        self.record_participants(&[&issue.assignee, &issue.reporter])
            .await?;

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
        self.ensure_seeded().await?;

        let mut issue = self
            .fetch_issue(id)
            .await?
            .ok_or_else(|| StoreError::not_found("Issue", id))?;
        patch.apply(&mut issue, Utc::now())?;

        let updated: Vec<IssueRow> = self
            .client
            .update(
                "issues",
                &[("id", format!("eq.{id}"))],
                &IssueChanges::from(&issue),
            )
            .await?;
        let issue = updated
            .into_iter()
            .next()
            .map(Issue::from)
            .ok_or_else(|| StoreError::not_found("Issue", id))?;

        self.record_participants(&[&issue.assignee, &issue.reporter])
            .await?;

        info!("Updated issue {}", issue.id);
        let comments = self.fetch_comments(id).await?;
        Ok(IssueWithComments { issue, comments })
    }

    async fn delete_issue(&self, id: &str) -> Result<IssueRemoval> {
        self.ensure_seeded().await?;

        let existing: Vec<IdRow> = self
            .client
            .select("issues", "id", &[("id", format!("eq.{id}"))])
            .await?;
        if existing.is_empty() {
            return Err(StoreError::not_found("Issue", id));
        }

        // Two-step saga: comments first, then the issue itself
        self.client
            .delete("comments", &[("issue_id", format!("eq.{id}"))])
            .await?;

        let filters = [("id", format!("eq.{id}"))];
        if let Err(e) = self.client.delete("issues", &filters).await {
            warn!("Issue delete failed, retrying once: {}", e);
            self.client.delete("issues", &filters).await?;
        }

        info!("Deleted issue {}", id);
        Ok(IssueRemoval {
            removed_id: id.to_string(),
        })
    }

    async fn add_comment(&self, issue_id: &str, draft: NewComment) -> Result<Comment> {
        draft.validate()?;
        self.ensure_seeded().await?;

        if self.fetch_issue(issue_id).await?.is_none() {
            return Err(StoreError::not_found("Issue", issue_id));
        }

        let now = Utc::now();
        let taken = self.taken_ids("comments").await?;
        let id = ids::comment_id(now.timestamp_millis(), &taken);
        let comment = draft.build(id, issue_id.to_string(), now)?;

        self.client
            .insert("comments", &[CommentRow::from(&comment)])
            .await?;
        self.record_participants(&[&comment.author]).await?;

        info!("Added comment {} to issue {}", comment.id, issue_id);
        Ok(comment)
    }
}
