//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, AppFlags};
use crate::commands;

const AFTER_HELP: &str = "\
With no arguments, refreshes the local inventory snapshot from the fleet CLI.

COMMAND:         logs | htop | console | ssh
ENVIRONMENT:     production | staging
INSTANCE_CLASS:  apps | sites | images | thumbs

Examples:
  fleetop                          refresh the inventory
  fleetop console production       open an application console
  fleetop ssh production apps      one shell per app server
  fleetop logs staging images      tail image_processor.log on every worker
  fleetop htop production apps     htop on the app servers";

/// Open logs, shells and monitors across a cloud fleet
#[derive(Parser)]
#[command(name = "fleetop", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also disabled by a set NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the remote command lines instead of opening sessions
    #[arg(long)]
    pub dry_run: bool,

    /// Inventory snapshot file [default: ~/.fleetop/inventory.json]
    #[arg(long, env = "FLEETOP_SNAPSHOT", value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Operator action: logs, htop, console, ssh
    #[arg(requires = "environment")]
    pub command: Option<String>,

    /// Deployment environment
    pub environment: Option<String>,

    /// Fleet role: apps, sites, images, thumbs
    pub instance_class: Option<String>,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, inventory access, or a launch fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            dry_run,
            snapshot,
            command,
            environment,
            instance_class,
        } = self;

        let app = AppContext::new(AppFlags {
            no_color,
            quiet,
            dry_run,
            snapshot,
        })?;

        match (command, environment, instance_class) {
            (None, None, None) => commands::refresh::run(&app, &app.lister()).await,
            (Some(command), Some(environment), None) => {
                commands::console::run(&app, &app.launcher(), &command, &environment).await
            }
            (Some(command), Some(environment), Some(class)) => {
                commands::dispatch::run(&app, &app.launcher(), &command, &environment, &class)
                    .await
            }
            _ => anyhow::bail!(
                "Usage: fleetop [COMMAND ENVIRONMENT [INSTANCE_CLASS]]. See 'fleetop --help'."
            ),
        }
    }
}
