//! Rota orchestration: the operations callers use to generate and
//! inspect weekly rotas.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::errors::{RotaError, RotaResult};
use crate::domain::models::duty_record::DutyRecord;
use crate::domain::models::week_rotation::{is_week_start, WeekRotation};
use crate::domain::ports::officer_repository::{OfficerFilter, OfficerRepository};
use crate::domain::ports::rotation_repository::{DutyFilter, RotationRepository};
use crate::services::rotation_tracker::RotationTracker;
use crate::services::{roster_resolver, schedule_generator};

/// A freshly generated week: the rotation row plus every duty record.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedWeek {
    pub rotation: WeekRotation,
    pub records: Vec<DutyRecord>,
}

pub struct RotaService<O: OfficerRepository, R: RotationRepository> {
    officers: Arc<O>,
    rotations: Arc<R>,
    tracker: RotationTracker<R>,
}

impl<O: OfficerRepository, R: RotationRepository> RotaService<O, R> {
    pub fn new(officers: Arc<O>, rotations: Arc<R>) -> Self {
        let tracker = RotationTracker::new(rotations.clone());
        Self { officers, rotations, tracker }
    }

    /// Generate and persist the rota for the week starting at
    /// `week_start` (must be a Sunday).
    ///
    /// The whole week is written in one transaction; if anything fails
    /// mid-batch the week does not exist afterwards.
    #[instrument(skip(self))]
    pub async fn generate_week(&self, week_start: NaiveDate) -> RotaResult<GeneratedWeek> {
        if !is_week_start(week_start) {
            return Err(RotaError::InvalidWeekStart(week_start));
        }

        let assignment = self.tracker.resolve_teams(week_start).await?;

        // Roster snapshot for this run, name-ascending.
        let roster = self.officers.list(OfficerFilter::default()).await?;
        let resolved = roster_resolver::resolve(&roster, assignment.day_shift);
        let records = schedule_generator::generate(week_start, &resolved);

        let rotation = WeekRotation::new(week_start, assignment.day_shift);
        self.rotations.create_week(&rotation, &records).await?;

        info!(
            week_start = %week_start,
            day_shift_team = %rotation.day_shift_team,
            night_shift_team = %rotation.night_shift_team(),
            records = records.len(),
            "generated weekly rota"
        );

        Ok(GeneratedWeek { rotation, records })
    }

    /// Look up the stored rotation for a week.
    pub async fn resolve_rotation(&self, week_start: NaiveDate) -> RotaResult<WeekRotation> {
        if !is_week_start(week_start) {
            return Err(RotaError::InvalidWeekStart(week_start));
        }
        self.rotations
            .find_by_week_start(week_start)
            .await?
            .ok_or(RotaError::RotationNotFound(week_start))
    }

    /// Stored duty records matching the filter.
    pub async fn duties(&self, filter: DutyFilter) -> RotaResult<Vec<DutyRecord>> {
        self.rotations.list_duties(filter).await
    }
}
