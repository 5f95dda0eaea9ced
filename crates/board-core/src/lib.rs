pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::comment::Comment;
pub use models::comment_payload::NewComment;
pub use models::issue::{Issue, IssueWithComments};
pub use models::issue_filter::{IssueFilter, split_list};
pub use models::issue_payload::{IssuePatch, LabelsInput, NewIssue};
pub use models::issue_priority::IssuePriority;
pub use models::issue_status::IssueStatus;
pub use models::issue_type::IssueType;
pub use models::project::Project;
pub use models::sprint::Sprint;
pub use models::sprint_payload::{NewSprint, SprintPatch};
pub use models::sprint_state::SprintState;
pub use models::users::{
    DEFAULT_COMMENT_AUTHOR, DEFAULT_REPORTER, DEFAULT_USERS, UNASSIGNED, record_participant,
};
