//! Week rotation domain model.
//!
//! A `WeekRotation` records which regular team works days for one week.
//! It is keyed by the week-start date (a Sunday), is unique per week,
//! and is never mutated after creation: the next week's assignment is
//! always derived by flipping the stored one.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::officer::Team;

/// The canonical first day of a scheduling week.
pub const WEEK_START_DAY: Weekday = Weekday::Sun;

/// Which team works day shift for the week beginning at `week_start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRotation {
    pub id: Uuid,
    /// Sunday of the week this rotation covers.
    pub week_start: NaiveDate,
    pub day_shift_team: Team,
    pub created_at: DateTime<Utc>,
}

impl WeekRotation {
    pub fn new(week_start: NaiveDate, day_shift_team: Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            week_start,
            day_shift_team,
            created_at: Utc::now(),
        }
    }

    /// The team on nights: always the complement of the day team.
    pub fn night_shift_team(&self) -> Team {
        self.day_shift_team.opposite()
    }

    /// Last day of the covered week (the following Saturday).
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + chrono::Duration::days(6)
    }
}

/// Whether `date` is a valid week start (a Sunday).
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == WEEK_START_DAY
}
