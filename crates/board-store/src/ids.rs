//! Identifier allocation, shared by both storage providers.
//!
//! Issue ids are `<PROJECT_KEY>-<N>` with N strictly increasing and never
//! reused. The local snapshot persists the next N in its metadata; the
//! remote provider derives it by scanning existing ids for the key prefix.
//! The two strategies are internally consistent but can hand out different
//! numbers if a deployment switches provider mid-life - both live here so
//! that either way the formatting and scanning rules stay in one place.
//!
//! Sprint and comment ids are stamped from wall-clock milliseconds; the
//! allocator bumps the stamp while the candidate collides with an id that
//! already exists.

/// Format an issue id from a project key and a sequence number.
pub fn issue_id(project_key: &str, number: u64) -> String {
    format!("{project_key}-{number}")
}

/// Extract the numeric suffix of `id` when it carries this project's prefix.
pub fn issue_number(project_key: &str, id: &str) -> Option<u64> {
    let suffix = id.strip_prefix(project_key)?.strip_prefix('-')?;
    suffix.parse().ok()
}

/// Max-scan strategy: one past the highest allocated number, starting at 1.
pub fn next_issue_number<'a, I>(project_key: &str, existing: I) -> u64
where
    I: IntoIterator<Item = &'a str>,
{
    existing
        .into_iter()
        .filter_map(|id| issue_number(project_key, id))
        .max()
        .map_or(1, |n| n + 1)
}

pub fn sprint_id(now_ms: i64, taken: &[String]) -> String {
    stamped_id("sprint", now_ms, taken)
}

pub fn comment_id(now_ms: i64, taken: &[String]) -> String {
    stamped_id("comment", now_ms, taken)
}

fn stamped_id(prefix: &str, now_ms: i64, taken: &[String]) -> String {
    let mut stamp = now_ms;
    loop {
        let candidate = format!("{prefix}-{stamp}");
        if !taken.iter().any(|t| *t == candidate) {
            return candidate;
        }
        stamp += 1;
    }
}
