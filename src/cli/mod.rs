//! Command-line interface for trackui
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::OutputOptions;
use crate::prefs::{FileStore, KeyValueStore, MemoryStore, PreferenceFlags};
use crate::storage::Storage;

mod chart;
mod flag;
mod form;
mod fragment;
mod hints;
mod init;

/// trackui - sprint tracker UI state
///
/// Drives the item creation form and the UI preference flags of a sprint
/// tracker from the terminal.
#[derive(Parser, Debug)]
#[command(name = "trackui")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding preferences and `.trackui.toml`
    #[arg(long, global = true, env = "TRACKUI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory and a default config
    Init,

    /// Show or flip the hints preference
    #[command(subcommand)]
    Hints(HintsCommands),

    /// Raw preference flag access
    #[command(subcommand)]
    Flag(FlagCommands),

    /// Item creation form
    #[command(subcommand)]
    Form(FormCommands),

    /// Build burndown chart input
    Chart {
        /// Category labels (defaults to Start, Sprint 1, ...)
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Ideal remaining effort per category
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        ideal: Vec<f64>,

        /// Actual remaining effort per category
        #[arg(long, value_delimiter = ',', required = true)]
        actual: Vec<i64>,

        /// Compute the ideal line from this total instead of --ideal
        #[arg(long, requires = "steps", conflicts_with = "ideal")]
        total: Option<f64>,

        /// Number of steps for --total
        #[arg(long, requires = "total")]
        steps: Option<usize>,

        /// Sprint chart instead of the whole-project chart
        #[arg(long)]
        sprint: bool,
    },

    /// Build the request path for an item's view fragment
    Fragment {
        #[arg(long)]
        project: u64,

        #[arg(long)]
        item: u64,

        /// Requesting page: project, project-progress, sprint-history, task-board
        #[arg(long, default_value = "project")]
        source: String,

        /// Sprint id (required for sprint-history and task-board)
        #[arg(long)]
        sprint: Option<u64>,
    },
}

/// Hints subcommands
#[derive(Subcommand, Debug)]
pub enum HintsCommands {
    /// Show whether hints are on
    Status,
    /// Turn hints on
    On,
    /// Turn hints off
    Off,
    /// Flip hints
    Toggle,
}

/// Flag subcommands
#[derive(Subcommand, Debug)]
pub enum FlagCommands {
    /// Print a flag's raw value
    Get { key: String },
    /// Store a raw value
    Set { key: String, value: String },
    /// Blank a flag so it reads as unset
    Clear { key: String },
}

/// Form subcommands
#[derive(Subcommand, Debug)]
pub enum FormCommands {
    /// Apply type selections in order and show the resulting form
    Preview {
        /// Types to select, e.g. BUG STORY EPIC
        #[arg(required = true)]
        types: Vec<String>,
    },

    /// Fill the form for one type and commit it as on submit
    Submit {
        #[arg(long = "type")]
        item_type: String,

        #[arg(long)]
        story_parent: Option<String>,

        #[arg(long)]
        epic_parent: Option<String>,

        #[arg(long)]
        task_effort: Option<String>,

        #[arg(long)]
        story_effort: Option<String>,
    },
}

/// Resolved global state shared by subcommands
pub(crate) struct Context {
    pub storage: Storage,
    pub config: Config,
    pub output: OutputOptions,
}

impl Context {
    /// Flag store selected by `prefs.store`
    pub fn open_flags(&self) -> Result<PreferenceFlags<Box<dyn KeyValueStore>>> {
        let store: Box<dyn KeyValueStore> = match self.config.prefs.store.as_str() {
            "memory" => Box::new(MemoryStore::new()),
            _ => Box::new(FileStore::open(
                self.storage.clone(),
                &self.config.prefs.file,
                &self.config.prefs.path,
            )?),
        };
        Ok(PreferenceFlags::new(store))
    }
}

impl Cli {
    fn context(&self) -> Result<Context> {
        let storage = Storage::resolve(self.data_dir.as_deref())?;
        let config = Config::load_from_dir(storage.data_dir());
        tracing::debug!(data_dir = %storage.data_dir().display(), "resolved data dir");
        Ok(Context {
            storage,
            config,
            output: OutputOptions {
                json: self.json,
                quiet: self.quiet,
            },
        })
    }

    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        let ctx = self.context()?;
        match self.command {
            Commands::Init => init::run(&ctx),
            Commands::Hints(cmd) => hints::run(&ctx, cmd),
            Commands::Flag(cmd) => flag::run(&ctx, cmd),
            Commands::Form(cmd) => match cmd {
                FormCommands::Preview { types } => form::run_preview(&ctx, &types),
                FormCommands::Submit {
                    item_type,
                    story_parent,
                    epic_parent,
                    task_effort,
                    story_effort,
                } => form::run_submit(
                    &ctx,
                    form::SubmitOptions {
                        item_type,
                        story_parent,
                        epic_parent,
                        task_effort,
                        story_effort,
                    },
                ),
            },
            Commands::Chart {
                categories,
                ideal,
                actual,
                total,
                steps,
                sprint,
            } => chart::run(
                &ctx,
                chart::ChartOptions {
                    categories,
                    ideal,
                    actual,
                    total_and_steps: total.zip(steps),
                    sprint,
                },
            ),
            Commands::Fragment {
                project,
                item,
                source,
                sprint,
            } => fragment::run(&ctx, project, item, &source, sprint),
        }
    }
}
