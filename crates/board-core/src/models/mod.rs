pub mod comment;
pub mod comment_payload;
pub mod issue;
pub mod issue_filter;
pub mod issue_payload;
pub mod issue_priority;
pub mod issue_status;
pub mod issue_type;
pub mod project;
pub mod sprint;
pub mod sprint_payload;
pub mod sprint_state;
pub mod users;
