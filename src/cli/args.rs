// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for the planner.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Daily planner - one Markdown plan per day, with tags, templates and backups
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(version, about = "Daily plans, tags, templates and backups")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to $PLANNER_HOME or ~/DailyPlannerData)
    #[arg(short = 'D', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory and default tags
    Init,

    /// Read and write daily plans
    Plan(PlanArgs),

    /// Manage tags (categories)
    #[command(alias = "tag")]
    Tags(TagsArgs),

    /// Manage the template library
    #[command(alias = "templates")]
    Template(TemplateArgs),

    /// Back up the data directory
    Backup(BackupArgs),

    /// Daily reminder
    Remind(RemindArgs),

    /// Show or change settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the plan subcommand
#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommands,
}

/// Plan subcommands
#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// Show the plan for a date
    Show {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print the raw JSON record
        #[arg(long)]
        json: bool,
    },

    /// Save the plan for a date, replacing what was there
    Save {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Plan content (Markdown)
        #[arg(short, long, conflicts_with = "file")]
        content: Option<String>,

        /// Read content from a file ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Category tag (defaults to the first tag)
        #[arg(short, long)]
        tag: Option<String>,

        /// Set the done flag (`--done` alone means true; keeps the stored
        /// flag when omitted)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        done: Option<bool>,
    },

    /// Mark a saved plan as done or not done
    Done {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Clear the done flag instead
        #[arg(long)]
        undo: bool,
    },

    /// Print a sample Markdown plan
    Sample,

    /// Replace a plan's content with a template
    ApplyTemplate {
        /// Template category
        category: String,

        /// Template name
        name: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Render a plan as an HTML page
    Preview {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Arguments for the tags subcommand
#[derive(clap::Args, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: Option<TagsCommands>,
}

/// Tags subcommands
#[derive(Subcommand, Debug)]
pub enum TagsCommands {
    /// List tags in order (default)
    List,

    /// Add a tag
    Add {
        /// Tag name
        name: String,
    },
}

/// Arguments for the template subcommand
#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommands,
}

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates in a category, or in every category
    List {
        /// Category (all categories when omitted)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Print a template
    Show {
        /// Template category
        category: String,

        /// Template name
        name: String,

        /// Only print the start of the template
        #[arg(long)]
        preview: bool,
    },

    /// Save content as a template
    Save {
        /// Template category
        category: String,

        /// Template name
        name: String,

        /// Template content
        #[arg(short, long, conflicts_with = "file")]
        content: Option<String>,

        /// Read content from a file ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Save a plan's content as a template
    Import {
        /// Template category
        category: String,

        /// Template name
        name: String,

        /// Date of the plan to import (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a template
    Delete {
        /// Template category
        category: String,

        /// Template name
        name: String,
    },
}

/// Arguments for the backup subcommand
#[derive(clap::Args, Debug)]
pub struct BackupArgs {
    #[command(subcommand)]
    pub command: Option<BackupCommands>,
}

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Create a new backup archive (default)
    Create,

    /// List existing backup archives
    List,
}

/// Arguments for the remind subcommand
#[derive(clap::Args, Debug)]
pub struct RemindArgs {
    #[command(subcommand)]
    pub command: RemindCommands,
}

/// Remind subcommands
#[derive(Subcommand, Debug)]
pub enum RemindCommands {
    /// Send today's reminder now, whatever the time
    Check {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Run the reminder loop in the foreground
    Run,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings (default)
    Show,

    /// Set a value, e.g. `reminder.hour 8`
    Set {
        /// Setting key
        key: String,

        /// New value
        value: String,
    },

    /// Print the data directory and settings file paths
    Path,
}
