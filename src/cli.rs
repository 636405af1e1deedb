use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(
    author,
    version,
    about = "A CLI check-in note analyzer for team leads"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .pulse.yml config in the current directory
    Init,

    /// Extract observations, commitments, blockers and mood from a note
    #[command(visible_alias = "a")]
    Analyze {
        /// Note text (use '-' to read from stdin)
        note: Option<String>,

        /// Read the note from a file
        #[arg(long)]
        note_file: Option<String>,

        /// Display name of the team member the note is about
        #[arg(short, long)]
        member: String,

        /// Week identifier, e.g. 2026-W35
        #[arg(short, long, default_value = "current")]
        week: String,

        /// Day number, 1 (Monday) through 5 (Friday)
        #[arg(short, long, default_value_t = 1)]
        day: u8,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match a member name against the task tracker's user list
    Resolve {
        /// Display name of the team member
        #[arg(short, long)]
        member: String,

        /// Read the user roster from a JSON file instead of the tracker API
        #[arg(long)]
        users_file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a member's open tracker tasks
    Tasks {
        /// Display name of the team member
        #[arg(short, long)]
        member: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
