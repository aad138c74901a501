use clap::Parser;

use crate::Commands;

/// Main CLI application arguments
#[derive(Parser)]
#[clap(
    version = "0.1.0",
    about = "Interactive in-memory note-taking application"
)]
pub struct Cli {
    /// Prompt shown before each command line
    #[clap(long, value_parser)]
    pub prompt: Option<String>,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,

    /// Importance assigned to notes created without an explicit level
    #[clap(long)]
    pub importance: Option<String>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}

/// One line typed into the session, parsed as a command
#[derive(Parser)]
#[clap(name = "notebook", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    /// Command for this line
    #[clap(subcommand)]
    pub command: Commands,
}
