//! robot-lab CLI — inspect the robot catalog and task registry.
//!
//! Usage:
//!   robot-lab robots
//!   robot-lab dump --robot unitree_g1 [--out g1.json]
//!   robot-lab tasks

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use robot_lab::assets::robot_catalog;
use robot_lab::config::save_articulation;
use robot_lab::registry::{register_default_tasks, TaskRegistry};

#[derive(Parser, Debug)]
#[command(name = "robot-lab")]
#[command(about = "Inspect robot articulation configs and registered training tasks")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List robots in the articulation catalog.
    Robots,
    /// Dump one robot's articulation config as JSON.
    Dump {
        /// Catalog robot name (see `robots`).
        #[arg(long)]
        robot: String,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List registered training task ids.
    Tasks,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Robots => {
            let catalog = robot_catalog();
            let mut names: Vec<&String> = catalog.keys().collect();
            names.sort();
            for name in names {
                println!("{}", name);
            }
        }
        Command::Dump { robot, out } => {
            let catalog = robot_catalog();
            let Some(cfg) = catalog.get(&robot) else {
                bail!("unknown robot '{}' (run `robot-lab robots` for the catalog)", robot);
            };
            match out {
                Some(path) => {
                    save_articulation(&path, cfg)?;
                    tracing::info!("Wrote {} config to {}", robot, path.display());
                }
                None => {
                    let json = serde_json::to_string_pretty(cfg)
                        .context("Failed to serialize articulation config")?;
                    println!("{}", json);
                }
            }
        }
        Command::Tasks => {
            let mut registry = TaskRegistry::new();
            register_default_tasks(&mut registry)?;
            for id in registry.task_ids() {
                println!("{}", id);
            }
        }
    }

    Ok(())
}
