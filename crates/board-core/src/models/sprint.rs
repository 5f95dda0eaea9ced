use crate::SprintState;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed grouping of issues. Calendar dates are plain ISO dates so
/// that string and chronological ordering agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub goal: String,
    pub state: SprintState,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
