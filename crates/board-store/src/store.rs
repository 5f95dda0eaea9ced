//! The capability interface the HTTP layer talks to, plus provider
//! selection. The provider is decided once at startup from configuration
//! and held behind `Arc<dyn BoardStore>`; there is no per-call re-decision,
//! no retry and no fallback once chosen.

use crate::error::{Result, StoreError};
use crate::file::FileStore;
use crate::remote::RemoteStore;

use board_config::Config;
use board_core::{
    Comment, IssueFilter, IssuePatch, IssueWithComments, NewComment, NewIssue, NewSprint, Project,
    Sprint, SprintPatch,
};

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    LocalFile,
    RemoteTable,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalFile => "local-file",
            Self::RemoteTable => "remote-table",
        }
    }
}

/// Outcome of a sprint deletion: the sprint is gone and every issue that
/// referenced it has been detached (never deleted).
#[derive(Debug, Clone)]
pub struct SprintRemoval {
    pub removed_sprint_id: String,
    pub affected_issues: u64,
}

/// Outcome of an issue deletion; its comments are gone with it.
#[derive(Debug, Clone)]
pub struct IssueRemoval {
    pub removed_id: String,
}

#[async_trait]
pub trait BoardStore: Send + Sync {
    fn provider(&self) -> Provider;

    async fn project(&self) -> Result<Project>;

    /// The global user set: defaults plus every participant ever seen.
    async fn users(&self) -> Result<Vec<String>>;

    /// All sprints, ascending by start date.
    async fn list_sprints(&self) -> Result<Vec<Sprint>>;
    async fn create_sprint(&self, draft: NewSprint) -> Result<Sprint>;
    async fn update_sprint(&self, id: &str, patch: SprintPatch) -> Result<Sprint>;
    async fn delete_sprint(&self, id: &str) -> Result<SprintRemoval>;

    /// Filtered issues, newest first, each with its comments attached.
    async fn list_issues(&self, filter: IssueFilter) -> Result<Vec<IssueWithComments>>;
    async fn get_issue(&self, id: &str) -> Result<IssueWithComments>;
    async fn create_issue(&self, draft: NewIssue) -> Result<IssueWithComments>;
    async fn update_issue(&self, id: &str, patch: IssuePatch) -> Result<IssueWithComments>;
    async fn delete_issue(&self, id: &str) -> Result<IssueRemoval>;

    async fn add_comment(&self, issue_id: &str, draft: NewComment) -> Result<Comment>;
}

/// Choose the storage provider from configuration. Remote wins only when
/// the feature flag and both credentials are all present; otherwise the
/// local snapshot file is used.
pub fn select_store(config: &Config) -> Result<Arc<dyn BoardStore>> {
    if let Some((url, key)) = config.remote.credentials() {
        info!("Storage provider: remote table store at {}", url);
        return Ok(Arc::new(RemoteStore::new(url, key)));
    }

    if config.remote.enabled {
        warn!("Remote storage enabled but url/service key missing; using local snapshot");
    }

    let path = config
        .snapshot_path()
        .map_err(|e| StoreError::backend("resolve snapshot path", e.to_string()))?;
    info!("Storage provider: local snapshot at {}", path.display());
    Ok(Arc::new(FileStore::new(path)))
}
