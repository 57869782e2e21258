//! Weekly rota commands: generate, inspect, and query duty records.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use comfy_table::Cell;
use uuid::Uuid;

use crate::adapters::sqlite::{SqliteOfficerRepository, SqliteRotationRepository};
use crate::cli::open_database;
use crate::cli::output::table::{list_table, render_list};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::duty_record::{DutyRecord, ShiftKind};
use crate::domain::models::officer::Officer;
use crate::domain::models::week_rotation::WeekRotation;
use crate::domain::ports::officer_repository::{OfficerFilter, OfficerRepository};
use crate::domain::ports::rotation_repository::DutyFilter;
use crate::services::rota_service::RotaService;

#[derive(Subcommand, Debug)]
pub enum RotaCommands {
    /// Generate and persist the rota for a week
    Generate {
        /// Week start date (a Sunday, YYYY-MM-DD)
        week_start: NaiveDate,
    },

    /// Show the full rota for a generated week
    Show {
        /// Week start date (a Sunday, YYYY-MM-DD)
        week_start: NaiveDate,
    },

    /// Show which team works days for a week
    Rotation {
        /// Week start date (a Sunday, YYYY-MM-DD)
        week_start: NaiveDate,
    },

    /// List stored duty records
    Duties {
        /// Filter by a single date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Filter by week (week start date, YYYY-MM-DD)
        #[arg(long, conflicts_with = "date")]
        week_start: Option<NaiveDate>,

        /// Filter by officer name
        #[arg(long)]
        officer: Option<String>,
    },
}

#[derive(Debug, serde::Serialize)]
struct GenerateOutput {
    message: String,
    week_start: NaiveDate,
    day_shift_team: i64,
    night_shift_team: i64,
    records_created: usize,
}

impl CommandOutput for GenerateOutput {
    fn to_human(&self) -> String {
        format!(
            "{}\n  Week start: {}\n  Day shift: team {}\n  Night shift: team {}\n  Duty records created: {}",
            self.message,
            self.week_start,
            self.day_shift_team,
            self.night_shift_team,
            self.records_created
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
struct RotationOutput {
    week_start: NaiveDate,
    day_shift_team: i64,
    night_shift_team: i64,
}

impl From<&WeekRotation> for RotationOutput {
    fn from(rotation: &WeekRotation) -> Self {
        Self {
            week_start: rotation.week_start,
            day_shift_team: rotation.day_shift_team.as_i64(),
            night_shift_team: rotation.night_shift_team().as_i64(),
        }
    }
}

impl CommandOutput for RotationOutput {
    fn to_human(&self) -> String {
        format!(
            "Week of {}: team {} on days, team {} on nights",
            self.week_start, self.day_shift_team, self.night_shift_team
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// One officer's entry in the week view.
#[derive(Debug, serde::Serialize)]
struct OfficerDuty {
    name: String,
    role: String,
    status: String,
}

/// A single day's rota.
#[derive(Debug, serde::Serialize)]
struct DayRota {
    date: NaiveDate,
    day_of_week: String,
    day_shift: Vec<OfficerDuty>,
    night_shift: Vec<OfficerDuty>,
}

#[derive(Debug, serde::Serialize)]
struct WeekRotaOutput {
    week_start: NaiveDate,
    week_end: NaiveDate,
    day_shift_team: i64,
    night_shift_team: i64,
    days: Vec<DayRota>,
}

fn shift_cell(duties: &[OfficerDuty]) -> String {
    if duties.is_empty() {
        return "-".to_string();
    }
    duties
        .iter()
        .map(|d| {
            if d.status == "off_duty" {
                format!("{} (off)", d.name)
            } else {
                d.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl CommandOutput for WeekRotaOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["Date", "Day", "Day shift", "Night shift"]);
        for day in &self.days {
            table.add_row(vec![
                Cell::new(day.date.to_string()),
                Cell::new(&day.day_of_week),
                Cell::new(shift_cell(&day.day_shift)),
                Cell::new(shift_cell(&day.night_shift)),
            ]);
        }
        format!(
            "Week {} to {} (team {} days / team {} nights)\n{}",
            self.week_start, self.week_end, self.day_shift_team, self.night_shift_team, table
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

struct DutyListOutput {
    duties: Vec<DutyRecord>,
    officers: HashMap<Uuid, Officer>,
}

impl CommandOutput for DutyListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["Date", "Officer", "Shift", "Status"]);
        for duty in &self.duties {
            let name = self
                .officers
                .get(&duty.officer_id)
                .map_or("<unknown>", |o| o.name.as_str());
            table.add_row(vec![
                Cell::new(duty.date.to_string()),
                Cell::new(name),
                Cell::new(duty.shift.to_string()),
                Cell::new(duty.status.to_string()),
            ]);
        }
        render_list("duty record", &table, self.duties.len())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.duties).unwrap_or_default()
    }
}

async fn roster_by_id(repo: &SqliteOfficerRepository) -> Result<HashMap<Uuid, Officer>> {
    let officers = repo
        .list(OfficerFilter::default())
        .await
        .context("Failed to load officer roster")?;
    Ok(officers.into_iter().map(|o| (o.id, o)).collect())
}

fn build_week_view(
    rotation: &WeekRotation,
    duties: &[DutyRecord],
    officers: &HashMap<Uuid, Officer>,
) -> WeekRotaOutput {
    let mut days: Vec<DayRota> = (0..7)
        .map(|offset| {
            let date = rotation.week_start + chrono::Duration::days(offset);
            DayRota {
                date,
                day_of_week: date.format("%A").to_string(),
                day_shift: Vec::new(),
                night_shift: Vec::new(),
            }
        })
        .collect();

    for duty in duties {
        let offset = (duty.date - rotation.week_start).num_days();
        if !(0..7).contains(&offset) {
            continue;
        }
        let Some(officer) = officers.get(&duty.officer_id) else {
            continue;
        };
        let entry = OfficerDuty {
            name: officer.name.clone(),
            role: officer.role.to_string(),
            status: duty.status.to_string(),
        };
        let day = &mut days[offset as usize];
        match duty.shift {
            ShiftKind::Day => day.day_shift.push(entry),
            ShiftKind::Night => day.night_shift.push(entry),
        }
    }

    WeekRotaOutput {
        week_start: rotation.week_start,
        week_end: rotation.week_end(),
        day_shift_team: rotation.day_shift_team.as_i64(),
        night_shift_team: rotation.night_shift_team().as_i64(),
        days,
    }
}

pub async fn execute(cmd: RotaCommands, json_mode: bool) -> Result<()> {
    let pool = open_database().await?;
    let officer_repo = Arc::new(SqliteOfficerRepository::new(pool.clone()));
    let rotation_repo = Arc::new(SqliteRotationRepository::new(pool));
    let service = RotaService::new(officer_repo.clone(), rotation_repo);

    match cmd {
        RotaCommands::Generate { week_start } => {
            let week = service
                .generate_week(week_start)
                .await
                .context("Failed to generate rota")?;

            output(
                &GenerateOutput {
                    message: "Rota generated successfully.".to_string(),
                    week_start,
                    day_shift_team: week.rotation.day_shift_team.as_i64(),
                    night_shift_team: week.rotation.night_shift_team().as_i64(),
                    records_created: week.records.len(),
                },
                json_mode,
            );
        }

        RotaCommands::Show { week_start } => {
            let rotation = service
                .resolve_rotation(week_start)
                .await
                .context("No rota for this week. Generate it first with 'rotaguard rota generate'.")?;
            let duties = service
                .duties(DutyFilter { week_start: Some(week_start), ..Default::default() })
                .await
                .context("Failed to load duty records")?;
            let officers = roster_by_id(&officer_repo).await?;

            output(&build_week_view(&rotation, &duties, &officers), json_mode);
        }

        RotaCommands::Rotation { week_start } => {
            let rotation = service
                .resolve_rotation(week_start)
                .await
                .context("Failed to resolve rotation")?;
            output(&RotationOutput::from(&rotation), json_mode);
        }

        RotaCommands::Duties { date, week_start, officer } => {
            let officers = roster_by_id(&officer_repo).await?;

            let officer_id = match officer {
                Some(name) => Some(
                    officers
                        .values()
                        .find(|o| o.name == name)
                        .map(|o| o.id)
                        .ok_or_else(|| anyhow!("No officer named '{name}'"))?,
                ),
                None => None,
            };

            let duties = service
                .duties(DutyFilter { date, week_start, officer_id })
                .await
                .context("Failed to list duty records")?;

            output(&DutyListOutput { duties, officers }, json_mode);
        }
    }

    Ok(())
}
