use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on an issue. Immutable once written; removed only when the
/// owning issue is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub issue_id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
