// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use daily_planner::cli::{
    BackupArgs, BackupCommands, PlanArgs, PlanCommands, RemindArgs, RemindCommands, SettingsArgs,
    SettingsCommands, TagsArgs, TagsCommands, TemplateArgs, TemplateCommands,
};
use daily_planner::error::{PlannerError, Result};
use daily_planner::plans::{PlanDate, SAMPLE_PLAN};
use daily_planner::preview::{preview_page, EscapedTextFormatter};
use daily_planner::utils;
use daily_planner::Planner;

/// Print a line in the given color
fn print_colored(color: Color, message: &str) {
    let mut stdout = io::stdout();
    let _ = stdout.execute(SetForegroundColor(color));
    print!("{}", message);
    let _ = stdout.execute(ResetColor);
    println!();
}

fn print_success(message: &str) {
    print_colored(Color::Green, message);
}

fn print_notice(message: &str) {
    print_colored(Color::Yellow, message);
}

/// Today unless a date was given; the stores validate the format
fn date_or_today(date: Option<String>) -> String {
    date.unwrap_or_else(|| PlanDate::today().to_string())
}

/// Content from `--content` or `--file` ("-" reads stdin), trimmed
fn read_content(content: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    let raw = match (content, file) {
        (Some(content), _) => content,
        (None, Some(path)) if path == Path::new("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => return Ok(None),
    };
    Ok(Some(raw.trim().to_string()))
}

pub(super) fn run_init(planner: &Planner) -> Result<()> {
    let paths = &planner.paths;
    print_success(&format!("Data directory ready: {}", paths.root().display()));
    println!("  tags:      {}", paths.tags_file().display());
    println!("  templates: {}", paths.templates_root().display());
    println!("  backups:   {}", paths.backup_dir().display());
    println!("  settings:  {}", paths.settings_file().display());
    Ok(())
}

pub(super) fn run_plan_command(planner: &Planner, args: PlanArgs) -> Result<()> {
    match args.command {
        PlanCommands::Show { date, json } => {
            let date = date_or_today(date);
            match planner.plans.load(&date) {
                Ok(plan) if json => println!("{}", serde_json::to_string_pretty(&plan)?),
                Ok(plan) => {
                    let status = if plan.done { "done" } else { "open" };
                    println!("{}  [{}]  {}", plan.date, plan.tag, status);
                    if !plan.last_modified.is_empty() {
                        println!("last modified {}", plan.last_modified);
                    }
                    println!();
                    println!("{}", plan.content);
                }
                Err(PlannerError::NotFound(_)) => {
                    print_notice(&format!(
                        "{} has no plan yet. Create one with `planner plan save -d {}`.",
                        date, date
                    ));
                }
                Err(e) => return Err(e),
            }
        }
        PlanCommands::Save {
            date,
            content,
            file,
            tag,
            done,
        } => {
            let date = date_or_today(date);
            let content = read_content(content, file)?;

            if let Some(tag) = tag.as_deref().filter(|t| !planner.tags.is_valid(t)) {
                print_notice(&format!(
                    "'{}' is not a known tag; add it with `planner tags add`.",
                    tag
                ));
            }

            let plan = planner
                .plans
                .update(&date, content.as_deref(), tag.as_deref(), done)?;
            print_success(&format!("Saved the plan for {}", plan.date));
        }
        PlanCommands::Done { date, undo } => {
            let date = date_or_today(date);
            let plan = planner.plans.set_done(&date, !undo)?;
            let state = if plan.done { "done" } else { "not done" };
            print_success(&format!("Marked {} as {}", plan.date, state));
        }
        PlanCommands::Sample => {
            println!("{}", SAMPLE_PLAN);
        }
        PlanCommands::ApplyTemplate {
            category,
            name,
            date,
        } => {
            let date = date_or_today(date);
            let content = planner.templates.load(&category, &name)?;
            let plan = planner.plans.update(&date, Some(content.as_str()), None, None)?;
            print_success(&format!(
                "Applied template '{}' to the plan for {}",
                name, plan.date
            ));
        }
        PlanCommands::Preview { date, output } => {
            let date = date_or_today(date);
            let plan = planner.plans.load(&date)?;
            let page = preview_page(&EscapedTextFormatter, &plan.date, &plan.content);
            write_output(output.as_deref(), &page)?;
        }
    }
    Ok(())
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            print_success(&format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub(super) fn run_tags_command(planner: &Planner, args: TagsArgs) -> Result<()> {
    match args.command.unwrap_or(TagsCommands::List) {
        TagsCommands::List => {
            for (i, tag) in planner.tags.load().iter().enumerate() {
                if i == 0 {
                    println!("{} (default)", tag);
                } else {
                    println!("{}", tag);
                }
            }
        }
        TagsCommands::Add { name } => {
            let before = planner.tags.load().len();
            let tags = planner.tags.add(&name)?;
            if tags.len() > before {
                print_success(&format!("Added tag '{}'", name));
            } else {
                print_notice(&format!("Tag '{}' is blank or already exists", name));
            }
        }
    }
    Ok(())
}

pub(super) fn run_template_command(planner: &Planner, args: TemplateArgs) -> Result<()> {
    let templates = &planner.templates;
    match args.command {
        TemplateCommands::List { category, search } => match category {
            Some(requested) => {
                let category = templates.resolve_category(&requested);
                if category != requested {
                    print_notice(&format!(
                        "Unknown category '{}', showing '{}'",
                        requested, category
                    ));
                }
                print_template_names(&category, &templates.list(&category, &search)?);
            }
            None => {
                for (category, _) in templates.catalog()? {
                    print_template_names(&category, &templates.list(&category, &search)?);
                }
            }
        },
        TemplateCommands::Show {
            category,
            name,
            preview,
        } => {
            let content = if preview {
                templates.preview(&category, &name, planner.settings.templates.preview_chars)?
            } else {
                templates.load(&category, &name)?
            };
            println!("{}", content);
        }
        TemplateCommands::Save {
            category,
            name,
            content,
            file,
        } => {
            let content = read_content(content, file)?.unwrap_or_default();
            templates.import(&category, &name, &content)?;
            print_success(&format!("Template '{}' saved in '{}'", name, category));
        }
        TemplateCommands::Import {
            category,
            name,
            date,
        } => {
            let date = date_or_today(date);
            let content = match planner.plans.find(&date)? {
                Some(plan) => plan.content,
                None => String::new(),
            };
            templates.import(&category, &name, &content)?;
            print_success(&format!("Template '{}' created from {}", name, date));
        }
        TemplateCommands::Delete { category, name } => {
            if templates.delete(&category, &name)? {
                print_success(&format!("Template '{}' deleted", name));
            } else {
                print_notice(&format!("Template '{}' not found in '{}'", name, category));
            }
        }
    }
    Ok(())
}

fn print_template_names(category: &str, names: &[String]) {
    println!("{}:", category);
    if names.is_empty() {
        println!("  (no templates)");
    }
    for name in names {
        println!("  {}", name);
    }
}

pub(super) fn run_backup_command(planner: &Planner, args: BackupArgs) -> Result<()> {
    match args.command.unwrap_or(BackupCommands::Create) {
        BackupCommands::Create => {
            let archive = planner.backups.create_backup()?;
            let size = std::fs::metadata(&archive).map(|m| m.len()).unwrap_or(0);
            print_success(&format!(
                "Backed up to {} ({})",
                archive.display(),
                utils::format_size(size)
            ));
        }
        BackupCommands::List => {
            let backups = planner.backups.list_backups()?;
            if backups.is_empty() {
                println!("No backups yet.");
            }
            for path in backups {
                let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                println!("{}  {}", path.display(), utils::format_size(size));
            }
        }
    }
    Ok(())
}

pub(super) fn run_remind_command(planner: &Planner, args: RemindArgs) -> Result<()> {
    match args.command {
        RemindCommands::Check { date } => {
            let date = PlanDate::parse(&date_or_today(date))?;
            let reminder = planner.reminder_scheduler().remind(&date)?;
            println!("{}", reminder.title());
            println!("{}", reminder.body());
        }
        RemindCommands::Run => {
            let config = &planner.settings.reminder;
            if !config.enabled {
                print_notice("The reminder is disabled (reminder.enabled = false).");
                return Ok(());
            }
            let scheduler = planner.reminder_scheduler();
            let handle = scheduler.start()?;
            print_success(&format!(
                "Reminder running, fires daily at {:02}:{:02}. Press Ctrl-C to stop.",
                config.hour, config.minute
            ));
            handle.wait()?;
        }
    }
    Ok(())
}

pub(super) fn run_settings_command(planner: Planner, args: SettingsArgs) -> Result<()> {
    let Planner {
        paths,
        mut settings,
        ..
    } = planner;

    match args.command.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCommands::Set { key, value } => {
            settings.set_value(&key, &value)?;
            settings.save(&paths)?;
            print_success(&format!("Set {} = {}", key, value));
        }
        SettingsCommands::Path => {
            println!("data:     {}", paths.root().display());
            println!("settings: {}", paths.settings_file().display());
            if !paths.settings_file().exists() {
                println!("(not written yet, defaults in use)");
            }
        }
    }
    Ok(())
}
