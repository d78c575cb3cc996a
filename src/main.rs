// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Daily planner CLI
//!
//! Entry point for the `planner` binary.

use clap::Parser;

use daily_planner::cli::{Cli, Commands};
use daily_planner::error::Result;
use daily_planner::paths::DataPaths;
use daily_planner::utils;
use daily_planner::Planner;

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{
    run_backup_command, run_init, run_plan_command, run_remind_command, run_settings_command,
    run_tags_command, run_template_command,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", utils::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on store and reminder diagnostics; `-vv` adds dependencies.
    // `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        let directives: &[&str] = if cli.verbose > 1 {
            &["debug"]
        } else {
            &["daily_planner=debug", "planner.reminder=debug"]
        };
        for directive in directives {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Initialize the data directory; nothing works without it
    let paths = DataPaths::resolve(cli.data_dir);
    let planner = Planner::open(paths)?;

    match cli.command {
        Commands::Init => run_init(&planner)?,
        Commands::Plan(args) => run_plan_command(&planner, args)?,
        Commands::Tags(args) => run_tags_command(&planner, args)?,
        Commands::Template(args) => run_template_command(&planner, args)?,
        Commands::Backup(args) => run_backup_command(&planner, args)?,
        Commands::Remind(args) => run_remind_command(&planner, args)?,
        Commands::Settings(args) => run_settings_command(planner, args)?,
    }

    Ok(())
}
