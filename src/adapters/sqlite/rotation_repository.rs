//! SQLite adapter for RotationRepository.
//!
//! The rotation row and its duty-record batch are written inside one
//! transaction, so a failed batch never leaves a half-generated week
//! behind. The UNIQUE constraint on `week_rotations.week_start` is the
//! authoritative duplicate-week guard.

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::adapters::sqlite::{format_date, is_unique_violation, parse_date, parse_datetime, parse_uuid};
use crate::domain::errors::{RotaError, RotaResult};
use crate::domain::models::duty_record::{DutyRecord, DutyStatus, ShiftKind};
use crate::domain::models::officer::Team;
use crate::domain::models::week_rotation::WeekRotation;
use crate::domain::ports::rotation_repository::{DutyFilter, RotationRepository};

#[derive(Clone)]
pub struct SqliteRotationRepository {
    pool: SqlitePool,
}

impl SqliteRotationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WeekRotationRow {
    id: String,
    week_start: String,
    day_shift_team: i64,
    created_at: String,
}

fn row_to_rotation(row: WeekRotationRow) -> RotaResult<WeekRotation> {
    Ok(WeekRotation {
        id: parse_uuid(&row.id)?,
        week_start: parse_date(&row.week_start)?,
        day_shift_team: Team::try_from(row.day_shift_team).map_err(RotaError::SerializationError)?,
        created_at: parse_datetime(&row.created_at)?,
    })
}

#[derive(sqlx::FromRow)]
struct DutyRecordRow {
    id: String,
    officer_id: String,
    date: String,
    shift: String,
    status: String,
    created_at: String,
}

fn row_to_duty(row: DutyRecordRow) -> RotaResult<DutyRecord> {
    let shift = ShiftKind::from_str(&row.shift)
        .ok_or_else(|| RotaError::SerializationError(format!("unknown shift '{}'", row.shift)))?;
    let status = DutyStatus::from_str(&row.status)
        .ok_or_else(|| RotaError::SerializationError(format!("unknown status '{}'", row.status)))?;

    Ok(DutyRecord {
        id: parse_uuid(&row.id)?,
        officer_id: parse_uuid(&row.officer_id)?,
        date: parse_date(&row.date)?,
        shift,
        status,
        created_at: parse_datetime(&row.created_at)?,
    })
}

async fn insert_duty(tx: &mut Transaction<'_, Sqlite>, record: &DutyRecord) -> RotaResult<()> {
    sqlx::query(
        "INSERT INTO duty_records (id, officer_id, date, shift, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
    )
    .bind(record.id.to_string())
    .bind(record.officer_id.to_string())
    .bind(format_date(record.date))
    .bind(record.shift.as_str())
    .bind(record.status.as_str())
    .bind(record.created_at.to_rfc3339())
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait]
impl RotationRepository for SqliteRotationRepository {
    async fn find_by_week_start(&self, week_start: chrono::NaiveDate) -> RotaResult<Option<WeekRotation>> {
        let row: Option<WeekRotationRow> =
            sqlx::query_as("SELECT * FROM week_rotations WHERE week_start = ?")
                .bind(format_date(week_start))
                .fetch_optional(&self.pool)
                .await?;

        row.map(row_to_rotation).transpose()
    }

    async fn create_week(&self, rotation: &WeekRotation, records: &[DutyRecord]) -> RotaResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO week_rotations (id, week_start, day_shift_team, created_at)
             VALUES (?1, ?2, ?3, ?4)"
        )
        .bind(rotation.id.to_string())
        .bind(format_date(rotation.week_start))
        .bind(rotation.day_shift_team.as_i64())
        .bind(rotation.created_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RotaError::WeekAlreadyExists(rotation.week_start)
            } else {
                e.into()
            }
        })?;

        for record in records {
            insert_duty(&mut tx, record).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_duties(&self, filter: DutyFilter) -> RotaResult<Vec<DutyRecord>> {
        let mut sql = String::from("SELECT * FROM duty_records WHERE 1=1");
        let mut dates: Vec<String> = Vec::new();

        if let Some(date) = filter.date {
            sql.push_str(" AND date = ?");
            dates.push(format_date(date));
        } else if let Some(week_start) = filter.week_start {
            sql.push_str(" AND date >= ? AND date < ?");
            dates.push(format_date(week_start));
            dates.push(format_date(week_start + chrono::Duration::days(7)));
        }
        if filter.officer_id.is_some() {
            sql.push_str(" AND officer_id = ?");
        }
        sql.push_str(" ORDER BY date ASC, shift ASC");

        let mut query = sqlx::query_as::<_, DutyRecordRow>(&sql);
        for date in &dates {
            query = query.bind(date);
        }
        if let Some(officer_id) = filter.officer_id {
            query = query.bind(officer_id.to_string());
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(row_to_duty).collect()
    }
}
