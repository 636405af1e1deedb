use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pulse::cli::{Cli, Commands};
use pulse::config::{PulseConfig, CONFIG_FILE_NAME};
use pulse::extract::Extractor;
use pulse::model::{CheckinNote, ExtractionBundle};
use pulse::tracker::{TrackerClient, TrackerTask, TrackerUser};
use pulse::{resolver, validation};

fn main() -> Result<()> {
    let cli = Cli::parse();
    pulse::logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::Analyze {
            note,
            note_file,
            member,
            week,
            day,
            json,
        } => {
            let content = resolve_note(note, note_file)?;
            validation::validate_member_name(&member)?;
            validation::validate_day_number(day)?;
            validation::validate_note(&content)?;

            let config = load_config()?;
            let extractor = Extractor::new(&config);
            let checkin = CheckinNote::new(member, week, day, content);
            let bundle = extractor.extract_note(&checkin);

            if json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            } else {
                print_bundle(&checkin, &bundle);
            }
            Ok(())
        }
        Commands::Resolve {
            member,
            users_file,
            json,
        } => {
            validation::validate_member_name(&member)?;
            let users = load_roster(users_file)?;

            match resolver::find_user(&member, &users) {
                Some(user) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(user)?);
                    } else {
                        println!(
                            "{} {} -> {} ({})",
                            "Matched".green(),
                            member.cyan(),
                            user.display_name.cyan().bold(),
                            user.id
                        );
                    }
                }
                None => {
                    if json {
                        println!("null");
                    } else {
                        println!("{} for '{}'", "No match".yellow(), member);
                    }
                }
            }
            Ok(())
        }
        Commands::Tasks { member, json } => {
            validation::validate_member_name(&member)?;
            let config = load_config()?;
            let client = TrackerClient::new(config.tracker_api_key()?, &config.tracker)?;

            let users = client.fetch_users()?;
            let Some(user) = resolver::find_user(&member, &users) else {
                // A normal outcome, not an error: the member simply has no
                // linked tracker account.
                if json {
                    println!("[]");
                } else {
                    println!("{} for '{}'", "No linked tracker account".yellow(), member);
                }
                return Ok(());
            };

            let tasks = client.fetch_user_tasks(&user.id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                println!(
                    "Open tasks for {} (tracker user {}):\n",
                    member.cyan().bold(),
                    user.display_name.cyan()
                );
                print_task_list(&tasks);
            }
            Ok(())
        }
    }
}

fn cmd_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    let config = PulseConfig::default();
    config.save(&config_path)?;

    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}

fn load_config() -> Result<PulseConfig> {
    let cwd = std::env::current_dir()?;
    PulseConfig::load_or_default(&cwd).context("Failed to load pulse configuration")
}

fn resolve_note(note: Option<String>, note_file: Option<String>) -> Result<String> {
    if let Some(n) = note {
        if n == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(content.trim().to_string());
        }
        return Ok(n);
    }
    if let Some(path) = note_file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read note from {}", path))?;
        return Ok(content.trim().to_string());
    }
    anyhow::bail!("Provide a note as an argument, via --note-file, or '-' for stdin")
}

fn load_roster(users_file: Option<String>) -> Result<Vec<TrackerUser>> {
    match users_file {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read roster from {}", path))?;
            let users: Vec<TrackerUser> = serde_json::from_str(&content)
                .with_context(|| format!("Invalid user roster in {}", path))?;
            Ok(users)
        }
        None => {
            let config = load_config()?;
            let client = TrackerClient::new(config.tracker_api_key()?, &config.tracker)?;
            Ok(client.fetch_users()?)
        }
    }
}

fn print_bundle(checkin: &CheckinNote, bundle: &ExtractionBundle) {
    println!(
        "{} {} / week {} / day {}\n",
        "Check-in".bold(),
        checkin.member_name.cyan().bold(),
        checkin.week_id,
        checkin.day_number
    );

    println!(
        "{}     {} {}",
        "Mood".bold(),
        bundle.mood.emoji,
        bundle.mood.note.dimmed()
    );

    if !bundle.observations.is_empty() {
        println!("\n{}", "Observations".bold());
        for obs in &bundle.observations {
            let tags = obs
                .tags
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  - {} [{}]", obs.title, tags.magenta());
            println!("    {}", obs.description.dimmed());
        }
    }

    if !bundle.commitments.is_empty() {
        println!("\n{}", "Commitments".bold());
        for c in &bundle.commitments {
            println!("  - {} (due: {})", c.title, c.due_type.to_string().yellow());
        }
    }

    if !bundle.blockers.is_empty() {
        println!("\n{}", "Blockers".bold());
        for b in &bundle.blockers {
            println!(
                "  - {} is waiting on {}: {}",
                b.blocked_name.cyan(),
                b.blocker_name.red(),
                b.reason.dimmed()
            );
        }
    }

    if let Some(summary) = &bundle.summary {
        println!("\n{} {}", "Summary".bold(), summary);
    }
}

fn print_task_list(tasks: &[TrackerTask]) {
    if tasks.is_empty() {
        println!("No open tasks.");
        return;
    }

    for task in tasks {
        let due = task
            .due_date
            .as_deref()
            .map(|d| format!(" due {}", d))
            .unwrap_or_default();
        println!(
            "{} {} [{}] {}{}",
            task.identifier.cyan(),
            format_status(&task.status),
            task.priority.blue(),
            task.title,
            due.yellow()
        );
    }
}

fn format_status(status: &str) -> colored::ColoredString {
    match status {
        "in_progress" => "in_progress".yellow(),
        "done" => "done".green(),
        "canceled" => "canceled".red(),
        "backlog" | "triage" => status.dimmed(),
        _ => status.white(),
    }
}
