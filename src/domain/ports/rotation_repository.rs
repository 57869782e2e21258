//! Repository port for week rotations and duty records.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::RotaResult;
use crate::domain::models::duty_record::DutyRecord;
use crate::domain::models::week_rotation::WeekRotation;

/// Filter for querying stored duty records.
///
/// `week_start` selects the seven dates starting there; it may be
/// combined with `officer_id`. `date` takes precedence over
/// `week_start` when both are set.
#[derive(Debug, Default, Clone, Copy)]
pub struct DutyFilter {
    pub date: Option<NaiveDate>,
    pub week_start: Option<NaiveDate>,
    pub officer_id: Option<Uuid>,
}

#[async_trait]
pub trait RotationRepository: Send + Sync {
    /// Find the rotation for a given week start.
    async fn find_by_week_start(&self, week_start: NaiveDate) -> RotaResult<Option<WeekRotation>>;

    /// Persist a week rotation together with its duty-record batch in
    /// a single transaction: either everything lands or nothing does.
    ///
    /// The store's uniqueness constraint on `week_start` is the
    /// authoritative duplicate guard; a violation maps to
    /// `WeekAlreadyExists`.
    async fn create_week(&self, rotation: &WeekRotation, records: &[DutyRecord]) -> RotaResult<()>;

    /// List duty records matching the filter, ordered by date then shift.
    async fn list_duties(&self, filter: DutyFilter) -> RotaResult<Vec<DutyRecord>>;
}
