//! Implementation of the `rotaguard init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::sqlite::initialize_database;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::Config;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force reinitialization even if already initialized
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub initialized_path: PathBuf,
    pub database_initialized: bool,
    pub config_written: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.config_written {
            lines.push("Wrote default config to .rotaguard/config.yaml".to_string());
        }
        if self.database_initialized {
            lines.push("Database initialized at .rotaguard/rotaguard.db".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir().context("Failed to get current directory")?.join(&args.path)
    };

    let rotaguard_dir = target_path.join(".rotaguard");

    // Check if already initialized
    if rotaguard_dir.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Project already initialized. Use --force to reinitialize.".to_string(),
            initialized_path: target_path,
            database_initialized: false,
            config_written: false,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    if args.force && rotaguard_dir.exists() {
        fs::remove_dir_all(&rotaguard_dir)
            .await
            .context("Failed to remove existing .rotaguard directory")?;
    }

    fs::create_dir_all(&rotaguard_dir)
        .await
        .with_context(|| format!("Failed to create {rotaguard_dir:?}"))?;

    // Write the default config so operators have something to edit.
    let config_path = rotaguard_dir.join("config.yaml");
    let config_yaml =
        serde_yaml::to_string(&Config::default()).context("Failed to serialize default config")?;
    fs::write(&config_path, config_yaml)
        .await
        .with_context(|| format!("Failed to write {config_path:?}"))?;

    // Initialize database
    let db_path = rotaguard_dir.join("rotaguard.db");
    let db_url = format!("sqlite:{}", db_path.display());
    initialize_database(&db_url).await.context("Failed to initialize database")?;

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Project reinitialized successfully.".to_string()
        } else {
            "Project initialized successfully.".to_string()
        },
        initialized_path: target_path,
        database_initialized: true,
        config_written: true,
    };

    output(&output_data, json_mode);
    Ok(())
}
