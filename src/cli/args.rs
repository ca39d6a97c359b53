use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "habit-diary")]
#[command(about = "A fixed-length daily habit tracker and journal")]
#[command(long_about = "habit-diary - daily habits, a journal and progress stats

Track a fixed-length program (90 days by default) of daily tasks. Check
tasks off, keep a short journal for each day and follow your completion
rate, streak and weekly checkpoints.

QUICK START:
  habit-diary init                  Start a program today
  habit-diary show                  Show today's tasks
  habit-diary check workout water   Check tasks off for today
  habit-diary journal \"Felt great\"  Save today's journal entry
  habit-diary stats                 Show progress

DAYS:
  Commands that act on a day take --day N (program day, 1-based).
  Without it they act on today's program day.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output`.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Program day selection shared by day commands.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct DayArg {
    /// Program day (1-based). Defaults to today's program day.
    #[arg(short, long)]
    pub day: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration that pins the program start date
    ///
    /// Without --start the program starts today. Refuses to overwrite an
    /// existing config file unless --force is given.
    ///
    /// # Examples
    ///
    ///   habit-diary init
    ///   habit-diary init --start 2024-01-01 --duration 30
    Init {
        /// First day of the program (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Program length in days
        #[arg(long)]
        duration: Option<u32>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show a day's tasks, progress and journal
    ///
    /// # Examples
    ///
    ///   habit-diary show
    ///   habit-diary show --day 12
    #[command(alias = "s")]
    Show(DayArg),

    /// List every program day with its completion status
    Days,

    /// List the configured daily tasks
    Tasks,

    /// Check off one or more tasks
    ///
    /// # Examples
    ///
    ///   habit-diary check workout
    ///   habit-diary check water sleep --day 3
    #[command(alias = "c")]
    Check {
        /// Task ids to check
        #[arg(required = true)]
        tasks: Vec<String>,

        #[command(flatten)]
        day: DayArg,
    },

    /// Uncheck one or more tasks
    Uncheck {
        /// Task ids to uncheck
        #[arg(required = true)]
        tasks: Vec<String>,

        #[command(flatten)]
        day: DayArg,
    },

    /// Check every task for a day
    #[command(name = "all")]
    SelectAll(DayArg),

    /// Uncheck every task for a day (the journal is kept)
    #[command(name = "none")]
    ClearAll(DayArg),

    /// Save or print a day's journal entry
    ///
    /// With TEXT (or --stdin) the entry is replaced verbatim. Without
    /// either, the current entry is printed.
    ///
    /// # Examples
    ///
    ///   habit-diary journal "Long run, slept well"
    ///   habit-diary journal --day 4
    ///   cat notes.txt | habit-diary journal --stdin
    #[command(alias = "j")]
    Journal {
        /// New journal text
        #[arg(conflicts_with = "stdin")]
        text: Option<String>,

        /// Read the journal text from standard input
        #[arg(long)]
        stdin: bool,

        #[command(flatten)]
        day: DayArg,
    },

    /// Reset a day: uncheck every task and erase the journal
    ///
    /// Asks for confirmation unless --yes is given.
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        day: DayArg,
    },

    /// Show progress statistics
    ///
    /// # Examples
    ///
    ///   habit-diary stats                 Summary and weekly checkpoints
    ///   habit-diary stats weeks           Weekly checkpoints only
    ///   habit-diary stats --print         Plain printable summary
    Stats(StatsArgs),

    /// Export the program and all day records as JSON
    ///
    /// Writes `transformation_diary_export.json` into ~/.habit-diary/exports/
    /// unless --file or --stdout is given.
    Export {
        /// Destination file
        #[arg(short, long, conflicts_with = "stdout")]
        file: Option<PathBuf>,

        /// Write the document to standard output
        #[arg(long)]
        stdout: bool,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for statistics.
#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: Option<StatsCommands>,

    /// Render a plain printable summary instead
    #[arg(long)]
    pub print: bool,
}

/// Statistics subcommands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsCommands {
    /// Headline numbers and weekly checkpoints
    Summary,

    /// Weekly checkpoint percentages
    Weeks,

    /// Current streak
    Streak,
}
