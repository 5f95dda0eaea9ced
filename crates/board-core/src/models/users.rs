//! The global user set.
//!
//! There is no user entity; the board tracks a deduplicated, order-preserving
//! list of names: the fixed default roster plus every assignee, reporter and
//! comment author ever seen. Names are never removed - the list doubles as an
//! audit trail of historical participants.

/// Sentinel used in place of an absent assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Reporter applied when a new issue names none.
pub const DEFAULT_REPORTER: &str = "Antonio - PM";

/// Author applied when a comment names none.
pub const DEFAULT_COMMENT_AUTHOR: &str = "Igor";

pub const DEFAULT_USERS: [&str; 7] = [
    "Antonio - PM",
    "Igor",
    "Bruno",
    "Arthur",
    "Xavier",
    "Raissa",
    "Jasmine",
];

/// Append `name` to the user set unless it is blank, the sentinel, or
/// already present.
pub fn record_participant(users: &mut Vec<String>, name: &str) {
    let name = name.trim();
    if name.is_empty() || name == UNASSIGNED {
        return;
    }
    if !users.iter().any(|u| u == name) {
        users.push(name.to_string());
    }
}
