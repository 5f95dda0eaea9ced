use crate::models::sprint::Sprint;
use crate::{CoreError, Result as CoreResult, SprintState};

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

const NAME_REQUIRED: &str = "name is required";
const STATE_INVALID: &str = "state must be one of: planned, active, closed";
const DATES_REQUIRED: &str = "startDate and endDate are required (YYYY-MM-DD)";
const DATE_RANGE_INVALID: &str = "endDate must not be before startDate";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSprint {
    pub name: String,
    pub goal: String,
    pub state: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl NewSprint {
    /// Check the payload without constructing; the first failing rule wins.
    pub fn validate(&self) -> CoreResult<()> {
        self.checked_parts().map(|_| ())
    }

    /// Construct the sprint. `validate` and `build` share the same rules.
    pub fn build(self, id: String, now: DateTime<Utc>) -> CoreResult<Sprint> {
        let (name, state, start_date, end_date) = self.checked_parts()?;

        Ok(Sprint {
            id,
            name,
            goal: self.goal.trim().to_string(),
            state,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        })
    }

    fn checked_parts(&self) -> CoreResult<(String, SprintState, NaiveDate, NaiveDate)> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::validation(NAME_REQUIRED));
        }

        let state = match self.state.as_deref() {
            None => SprintState::Planned,
            Some(raw) => {
                SprintState::from_str(raw).map_err(|_| CoreError::validation(STATE_INVALID))?
            }
        };

        let (Some(start_raw), Some(end_raw)) = (&self.start_date, &self.end_date) else {
            return Err(CoreError::validation(DATES_REQUIRED));
        };
        let start_date = parse_date(start_raw, "startDate")?;
        let end_date = parse_date(end_raw, "endDate")?;
        if end_date < start_date {
            return Err(CoreError::validation(DATE_RANGE_INVALID));
        }

        Ok((name, state, start_date, end_date))
    }
}

/// Partial sprint update. Only present fields are touched; the start/end
/// pair is not re-checked against each other.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SprintPatch {
    pub name: Option<String>,
    pub goal: Option<String>,
    pub state: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SprintPatch {
    pub fn apply(self, sprint: &mut Sprint, now: DateTime<Utc>) -> CoreResult<()> {
        if let Some(name) = self.name {
            sprint.name = name.trim().to_string();
        }
        if let Some(goal) = self.goal {
            sprint.goal = goal.trim().to_string();
        }
        if let Some(raw) = self.state {
            sprint.state =
                SprintState::from_str(&raw).map_err(|_| CoreError::validation(STATE_INVALID))?;
        }
        if let Some(raw) = self.start_date {
            sprint.start_date = parse_date(&raw, "startDate")?;
        }
        if let Some(raw) = self.end_date {
            sprint.end_date = parse_date(&raw, "endDate")?;
        }

        sprint.updated_at = now;
        Ok(())
    }
}

fn parse_date(raw: &str, field: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::validation(format!("{field} must be an ISO date (YYYY-MM-DD)")))
}
