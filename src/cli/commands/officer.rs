//! Officer roster management commands.

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use comfy_table::Cell;

use crate::adapters::sqlite::SqliteOfficerRepository;
use crate::cli::output::table::{list_table, render_list};
use crate::cli::output::{output, CommandOutput};
use crate::cli::open_database;
use crate::domain::models::officer::{Officer, OfficerRole, Team};
use crate::domain::ports::officer_repository::{OfficerFilter, OfficerRepository};

#[derive(Subcommand, Debug)]
pub enum OfficerCommands {
    /// Add an officer to the roster
    Add {
        /// Officer name (unique roster identity)
        name: String,

        /// Role: sergeant, dedicated, or regular
        #[arg(short, long, default_value = "regular")]
        role: String,

        /// Team number (1 or 2); required for regular officers
        #[arg(short, long)]
        team: Option<i64>,
    },

    /// List officers on the roster
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<String>,

        /// Filter by team number
        #[arg(short, long)]
        team: Option<i64>,
    },

    /// Show a single officer
    Show {
        /// Officer name
        name: String,
    },

    /// Update an officer's name, role, or team
    Update {
        /// Officer name
        name: String,

        /// New name
        #[arg(long)]
        rename: Option<String>,

        /// New role: sergeant, dedicated, or regular
        #[arg(long)]
        role: Option<String>,

        /// New team number (1 or 2)
        #[arg(long)]
        team: Option<i64>,

        /// Remove the team assignment
        #[arg(long, conflicts_with = "team")]
        clear_team: bool,
    },

    /// Remove an officer from the roster
    Delete {
        /// Officer name
        name: String,
    },
}

#[derive(Debug, serde::Serialize)]
struct OfficerOutput {
    message: String,
    officer: Officer,
}

impl CommandOutput for OfficerOutput {
    fn to_human(&self) -> String {
        let team = self.officer.team.map_or_else(|| "-".to_string(), |t| t.to_string());
        format!(
            "{}\n  Name: {}\n  Role: {}\n  Team: {}",
            self.message, self.officer.name, self.officer.role, team
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

struct OfficerListOutput {
    officers: Vec<Officer>,
}

impl CommandOutput for OfficerListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["Name", "Role", "Team"]);
        for officer in &self.officers {
            table.add_row(vec![
                Cell::new(&officer.name),
                Cell::new(officer.role.to_string()),
                Cell::new(officer.team.map_or_else(|| "-".to_string(), |t| t.to_string())),
            ]);
        }
        render_list("officer", &table, self.officers.len())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.officers).unwrap_or_default()
    }
}

fn parse_role(role: &str) -> Result<OfficerRole> {
    role.parse().map_err(|_| anyhow!("Invalid role '{role}'. Must be sergeant, dedicated, or regular"))
}

fn parse_team(team: i64) -> Result<Team> {
    Team::try_from(team).map_err(|e| anyhow!(e))
}

async fn find_by_name(repo: &SqliteOfficerRepository, name: &str) -> Result<Officer> {
    repo.get_by_name(name)
        .await
        .context("Failed to look up officer")?
        .ok_or_else(|| anyhow!("No officer named '{name}'. Use 'rotaguard officer list' to see the roster."))
}

pub async fn execute(cmd: OfficerCommands, json_mode: bool) -> Result<()> {
    let pool = open_database().await?;
    let repo = SqliteOfficerRepository::new(pool);

    match cmd {
        OfficerCommands::Add { name, role, team } => {
            let role = parse_role(&role)?;
            let team = team.map(parse_team).transpose()?;

            let officer = Officer::new(name, role, team);
            officer.validate().map_err(|e| anyhow!(e))?;
            repo.create(&officer).await.context("Failed to add officer")?;

            output(
                &OfficerOutput { message: "Officer added to roster.".to_string(), officer },
                json_mode,
            );
        }

        OfficerCommands::List { role, team } => {
            let filter = OfficerFilter {
                role: role.as_deref().map(parse_role).transpose()?,
                team: team.map(parse_team).transpose()?,
            };
            let officers = repo.list(filter).await.context("Failed to list officers")?;
            output(&OfficerListOutput { officers }, json_mode);
        }

        OfficerCommands::Show { name } => {
            let officer = find_by_name(&repo, &name).await?;
            output(
                &OfficerOutput { message: "Officer details:".to_string(), officer },
                json_mode,
            );
        }

        OfficerCommands::Update { name, rename, role, team, clear_team } => {
            let mut officer = find_by_name(&repo, &name).await?;

            if let Some(new_name) = rename {
                officer.name = new_name;
            }
            if let Some(new_role) = role {
                officer.role = parse_role(&new_role)?;
            }
            if let Some(new_team) = team {
                officer.team = Some(parse_team(new_team)?);
            }
            if clear_team {
                officer.team = None;
            }

            officer.validate().map_err(|e| anyhow!(e))?;
            repo.update(&officer).await.context("Failed to update officer")?;

            output(
                &OfficerOutput { message: "Officer updated.".to_string(), officer },
                json_mode,
            );
        }

        OfficerCommands::Delete { name } => {
            let officer = find_by_name(&repo, &name).await?;
            repo.delete(officer.id).await.context("Failed to delete officer")?;

            output(
                &OfficerOutput { message: "Officer removed from roster.".to_string(), officer },
                json_mode,
            );
        }
    }

    Ok(())
}
