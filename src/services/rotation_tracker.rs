//! Week-to-week team rotation tracking.
//!
//! The previous week's stored rotation is the sole source of truth for
//! this week's assignment: whichever team had days last week gets
//! nights, and vice versa. With no prior week on record, team 1 starts
//! on days.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::errors::{RotaError, RotaResult};
use crate::domain::models::officer::Team;
use crate::domain::ports::rotation_repository::RotationRepository;

/// Which team works which shift for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamAssignment {
    pub day_shift: Team,
    pub night_shift: Team,
}

impl TeamAssignment {
    fn for_day_team(day_shift: Team) -> Self {
        Self { day_shift, night_shift: day_shift.opposite() }
    }
}

pub struct RotationTracker<R: RotationRepository> {
    repo: Arc<R>,
}

impl<R: RotationRepository> RotationTracker<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Resolve the team split for the week starting at `week_start`.
    ///
    /// The duplicate-week check here is advisory; the store's unique
    /// constraint on `week_start` closes the race between two callers
    /// that both pass it.
    pub async fn resolve_teams(&self, week_start: NaiveDate) -> RotaResult<TeamAssignment> {
        if self.repo.find_by_week_start(week_start).await?.is_some() {
            return Err(RotaError::WeekAlreadyExists(week_start));
        }

        let prev_week_start = week_start - chrono::Duration::days(7);
        let day_shift = match self.repo.find_by_week_start(prev_week_start).await? {
            Some(prev) => prev.day_shift_team.opposite(),
            None => Team::One,
        };

        Ok(TeamAssignment::for_day_team(day_shift))
    }
}
