//! The dataset both providers start from: one project, the default user
//! roster, two sprints, three issues and one comment. Seeding is lazy -
//! the local store writes this on first read, the remote store inserts it
//! with insert-or-skip semantics on first use.

use board_core::{
    Comment, DEFAULT_USERS, Issue, IssuePriority, IssueStatus, IssueType, Project, Sprint,
    SprintState,
};

use chrono::{DateTime, NaiveDate, Utc};

/// Value of the persisted issue counter right after seeding: the seed
/// issues occupy 1..=3.
pub const SEED_ISSUE_COUNTER: u64 = 4;

pub fn project() -> Project {
    Project {
        id: "project-arbogame".to_string(),
        key: "ARBO".to_string(),
        name: "ArboGame".to_string(),
        description: "Primary ArboGame project board".to_string(),
    }
}

pub fn users() -> Vec<String> {
    DEFAULT_USERS.iter().map(|u| u.to_string()).collect()
}

pub fn sprints(now: DateTime<Utc>) -> Vec<Sprint> {
    vec![
        Sprint {
            id: "sprint-1".to_string(),
            name: "Sprint 1 - Core Loop".to_string(),
            goal: "Stabilize the main game loop".to_string(),
            state: SprintState::Active,
            start_date: date(2026, 2, 10),
            end_date: date(2026, 2, 24),
            created_at: now,
            updated_at: now,
        },
        Sprint {
            id: "sprint-2".to_string(),
            name: "Sprint 2 - Economy".to_string(),
            goal: "Roll out the first economy system".to_string(),
            state: SprintState::Planned,
            start_date: date(2026, 2, 25),
            end_date: date(2026, 3, 10),
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn issues(now: DateTime<Utc>) -> Vec<Issue> {
    vec![
        Issue {
            id: "ARBO-1".to_string(),
            title: "Implement player login".to_string(),
            description: "Authenticate players with a persistent session.".to_string(),
            issue_type: IssueType::Story,
            status: IssueStatus::InProgress,
            priority: IssuePriority::High,
            assignee: "Bruno".to_string(),
            reporter: "Antonio - PM".to_string(),
            labels: vec!["backend".to_string(), "auth".to_string()],
            story_points: 5.0,
            sprint_id: "sprint-1".to_string(),
            created_at: now,
            updated_at: now,
        },
        Issue {
            id: "ARBO-2".to_string(),
            title: "Fix inventory freeze".to_string(),
            description: "The app locks up when items are dragged quickly.".to_string(),
            issue_type: IssueType::Bug,
            status: IssueStatus::ToDo,
            priority: IssuePriority::Highest,
            assignee: "Arthur".to_string(),
            reporter: "Raissa".to_string(),
            labels: vec!["frontend".to_string(), "inventory".to_string()],
            story_points: 3.0,
            sprint_id: "sprint-1".to_string(),
            created_at: now,
            updated_at: now,
        },
        Issue {
            id: "ARBO-3".to_string(),
            title: "Define starting economy".to_string(),
            description: "Model coins and base shop prices.".to_string(),
            issue_type: IssueType::Task,
            status: IssueStatus::Backlog,
            priority: IssuePriority::Medium,
            assignee: "Igor".to_string(),
            reporter: "Antonio - PM".to_string(),
            labels: vec!["design".to_string(), "economy".to_string()],
            story_points: 8.0,
            sprint_id: "sprint-2".to_string(),
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn comments(now: DateTime<Utc>) -> Vec<Comment> {
    vec![Comment {
        id: "comment-1".to_string(),
        issue_id: "ARBO-2".to_string(),
        author: "Raissa".to_string(),
        body: "Reproduces locally on every attempt.".to_string(),
        created_at: now,
    }]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}
