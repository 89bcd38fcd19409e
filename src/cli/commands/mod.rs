//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::cli::Commands;
use crate::error::Result;

pub mod init;
pub mod package;

/// Dispatch a command to its handler
pub fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Init(args) => init::run(args),
        Commands::Package(args) => package::run(args),
    }
}
