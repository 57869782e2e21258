//! SQLite adapter for OfficerRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{is_unique_violation, parse_datetime, parse_uuid};
use crate::domain::errors::{RotaError, RotaResult};
use crate::domain::models::officer::{Officer, OfficerRole, Team};
use crate::domain::ports::officer_repository::{OfficerFilter, OfficerRepository};

#[derive(Clone)]
pub struct SqliteOfficerRepository {
    pool: SqlitePool,
}

impl SqliteOfficerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OfficerRow {
    id: String,
    name: String,
    role: String,
    team: Option<i64>,
    created_at: String,
    updated_at: String,
}

fn row_to_officer(row: OfficerRow) -> RotaResult<Officer> {
    let role: OfficerRole = row
        .role
        .parse()
        .map_err(|_| RotaError::SerializationError(format!("unknown role '{}'", row.role)))?;
    let team = row
        .team
        .map(Team::try_from)
        .transpose()
        .map_err(RotaError::SerializationError)?;

    Ok(Officer {
        id: parse_uuid(&row.id)?,
        name: row.name,
        role,
        team,
        created_at: parse_datetime(&row.created_at)?,
        updated_at: parse_datetime(&row.updated_at)?,
    })
}

#[async_trait]
impl OfficerRepository for SqliteOfficerRepository {
    async fn create(&self, officer: &Officer) -> RotaResult<()> {
        let id = officer.id.to_string();
        let team = officer.team.map(Team::as_i64);
        let created = officer.created_at.to_rfc3339();
        let updated = officer.updated_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO officers (id, name, role, team, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        )
        .bind(&id)
        .bind(&officer.name)
        .bind(officer.role.as_str())
        .bind(team)
        .bind(&created)
        .bind(&updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RotaError::DuplicateOfficerName(officer.name.clone())
            } else {
                e.into()
            }
        })?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> RotaResult<Option<Officer>> {
        let row: Option<OfficerRow> = sqlx::query_as("SELECT * FROM officers WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_officer).transpose()
    }

    async fn get_by_name(&self, name: &str) -> RotaResult<Option<Officer>> {
        let row: Option<OfficerRow> = sqlx::query_as("SELECT * FROM officers WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_officer).transpose()
    }

    async fn update(&self, officer: &Officer) -> RotaResult<()> {
        let team = officer.team.map(Team::as_i64);
        let updated = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE officers SET name = ?2, role = ?3, team = ?4, updated_at = ?5
             WHERE id = ?1"
        )
        .bind(officer.id.to_string())
        .bind(&officer.name)
        .bind(officer.role.as_str())
        .bind(team)
        .bind(&updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RotaError::DuplicateOfficerName(officer.name.clone())
            } else {
                RotaError::from(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(RotaError::OfficerNotFound(officer.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RotaResult<()> {
        let result = sqlx::query("DELETE FROM officers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RotaError::OfficerNotFound(id));
        }
        Ok(())
    }

    async fn list(&self, filter: OfficerFilter) -> RotaResult<Vec<Officer>> {
        let rows: Vec<OfficerRow> = match (filter.role, filter.team) {
            (Some(role), Some(team)) => {
                sqlx::query_as("SELECT * FROM officers WHERE role = ? AND team = ? ORDER BY name ASC")
                    .bind(role.as_str())
                    .bind(team.as_i64())
                    .fetch_all(&self.pool)
                    .await?
            }
            (Some(role), None) => {
                sqlx::query_as("SELECT * FROM officers WHERE role = ? ORDER BY name ASC")
                    .bind(role.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            (None, Some(team)) => {
                sqlx::query_as("SELECT * FROM officers WHERE team = ? ORDER BY name ASC")
                    .bind(team.as_i64())
                    .fetch_all(&self.pool)
                    .await?
            }
            (None, None) => {
                sqlx::query_as("SELECT * FROM officers ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(row_to_officer).collect()
    }

    async fn find_by_role(&self, role: OfficerRole) -> RotaResult<Vec<Officer>> {
        self.list(OfficerFilter { role: Some(role), team: None }).await
    }

    async fn find_by_role_and_team(&self, role: OfficerRole, team: Team) -> RotaResult<Vec<Officer>> {
        self.list(OfficerFilter { role: Some(role), team: Some(team) }).await
    }
}
