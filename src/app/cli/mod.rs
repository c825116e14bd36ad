//! CLI Adapter.

mod check;
mod plan;
mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::BootstrapOptions;
use crate::domain::{AppError, PrivilegeTier};

#[derive(Parser)]
#[command(name = "appboot")]
#[command(version)]
#[command(
    about = "Provision an App Service container and hand off to the ASGI server",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    /// Defaults to `run` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Configuration file (defaults to <app-dir>/appboot.toml when present)
    #[arg(long, global = true, env = "APPBOOT_CONFIG")]
    config: Option<PathBuf>,
    /// Privilege tier: system or constrained
    #[arg(long, global = true, env = "APPBOOT_TIER")]
    tier: Option<PrivilegeTier>,
    /// Application directory (defaults to the current directory)
    #[arg(long, global = true, env = "APPBOOT_APP_DIR")]
    app_dir: Option<PathBuf>,
}

impl GlobalArgs {
    fn options(&self) -> BootstrapOptions {
        BootstrapOptions {
            config_path: self.config.clone(),
            tier: self.tier,
            app_dir: self.app_dir.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full bootstrap sequence and exec the server
    #[clap(visible_alias = "r")]
    Run,
    /// Verify OCR/PDF capabilities and the entry point
    #[clap(visible_alias = "c")]
    Check {
        /// Also fail when the entry point resolves to the fallback module
        #[arg(long)]
        strict: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show what `run` would do without doing it
    #[clap(visible_alias = "p")]
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the exported variables as shell `export` lines
    #[clap(visible_alias = "e")]
    Env,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let options = cli.global.options();

    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run::run_bootstrap(&options),
        Commands::Check { strict, json } => check::run_check(&options, strict, json),
        Commands::Plan { json } => plan::run_plan(&options, json).map(|_| 0),
        Commands::Env => plan::run_env(&options).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
