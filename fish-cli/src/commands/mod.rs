//! CLI command implementations

use clap::{Args, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::context::ReaderContext;
use crate::error::CliResult;

pub mod generate_config;
pub mod paginate;
pub mod reader;

/// Options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Directory holding the bookshelf and config.toml
    #[arg(long, value_name = "DIR", env = "FISH_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default: <data dir>/config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Default log filter for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn context(&self) -> CliResult<ReaderContext> {
        ReaderContext::new(self.data_dir.as_deref(), self.config.as_deref())
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a book to the bookshelf and start reading it
    Open(reader::OpenArgs),

    /// Show the current page of the open book
    Show,

    /// Move forward and show the new page
    Next(reader::StepArgs),

    /// Move back and show the new page
    Prev(reader::StepArgs),

    /// Jump to a source line of the open book
    Goto(reader::GotoArgs),

    /// Show reading position and progress
    Status,

    /// List books on the bookshelf
    List,

    /// Remove a book from the bookshelf
    Remove(reader::RemoveArgs),

    /// Print the pagination of text files with their source line mapping
    Paginate(paginate::PaginateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the command, writing user-facing output to `out`
    pub fn execute(&self, global: &GlobalArgs, out: &mut dyn Write) -> CliResult<()> {
        use reader::Navigation;

        match self {
            Commands::Open(args) => args.execute(&global.context()?, out),
            Commands::Show => reader::navigate(&global.context()?, Navigation::Stay, out),
            Commands::Next(args) => {
                reader::navigate(&global.context()?, Navigation::Forward(args.count), out)
            }
            Commands::Prev(args) => {
                reader::navigate(&global.context()?, Navigation::Back(args.count), out)
            }
            Commands::Goto(args) => {
                reader::navigate(&global.context()?, Navigation::Line(args.line), out)
            }
            Commands::Status => reader::status(&global.context()?, out),
            Commands::List => reader::list(&global.context()?, out),
            Commands::Remove(args) => args.execute(&global.context()?, out),
            Commands::Paginate(args) => args.execute(global, out),
            Commands::GenerateConfig(args) => args.execute(out),
        }
    }
}
