use crate::models::comment::Comment;
use crate::models::users::DEFAULT_COMMENT_AUTHOR;
use crate::{CoreError, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::Deserialize;

const BODY_REQUIRED: &str = "body is required";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

impl NewComment {
    pub fn validate(&self) -> CoreResult<()> {
        self.checked_body().map(|_| ())
    }

    pub fn build(self, id: String, issue_id: String, now: DateTime<Utc>) -> CoreResult<Comment> {
        let body = self.checked_body()?;

        let author = self.author.trim();
        let author = if author.is_empty() {
            DEFAULT_COMMENT_AUTHOR.to_string()
        } else {
            author.to_string()
        };

        Ok(Comment {
            id,
            issue_id,
            author,
            body,
            created_at: now,
        })
    }

    fn checked_body(&self) -> CoreResult<String> {
        let body = self.body.trim();
        if body.is_empty() {
            return Err(CoreError::validation(BODY_REQUIRED));
        }
        Ok(body.to_string())
    }
}
