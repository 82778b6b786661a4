mod commands;
mod error;
mod render;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{register, roster, syllabus, Context};
use crate::error::{exit_code_for, report_error};
use crate::render::Printer;
use rollcall_config as config;
use rollcall_store::{paths, Roster};

#[derive(Debug, Parser)]
#[command(name = "rollcall", version, about = "rollcall CLI")]
struct Cli {
    /// Roster CSV file (defaults to ./registered_students.csv)
    #[arg(long, global = true)]
    roster_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, global = true)]
    no_color: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the syllabus and record an email registration (default)
    Register(register::RegisterArgs),
    /// Print the course banner, lab schedule, and assessment breakdown
    Syllabus,
    /// List recorded registrations
    Roster,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        roster_path,
        config: config_path,
        json,
        no_color,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let roster_path =
        paths::resolve_roster_path(roster_path).with_context(|| "resolve roster path")?;
    if verbose {
        debug!(path = %roster_path.display(), "roster path resolved");
    }
    let roster = Roster::open(roster_path);

    let printer = Printer::new(color_enabled(no_color));
    let ctx = Context {
        roster: &roster,
        config: &app_config,
        json,
        printer: &printer,
    };

    let command = command.unwrap_or(Command::Register(register::RegisterArgs::default()));
    match command {
        Command::Register(args) => register::register(&ctx, args),
        Command::Syllabus => syllabus::show(&ctx),
        Command::Roster => roster::list(&ctx),
    }
}

fn color_enabled(no_color: bool) -> bool {
    !no_color && env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
