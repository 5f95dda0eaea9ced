use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IssueType {
    Story,
    Task,
    Bug,
    Epic,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::Story,
        IssueType::Task,
        IssueType::Bug,
        IssueType::Epic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Story => "Story",
            Self::Task => "Task",
            Self::Bug => "Bug",
            Self::Epic => "Epic",
        }
    }
}

impl FromStr for IssueType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Story" => Ok(Self::Story),
            "Task" => Ok(Self::Task),
            "Bug" => Ok(Self::Bug),
            "Epic" => Ok(Self::Epic),
            _ => Err(CoreError::InvalidIssueType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
