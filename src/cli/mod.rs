//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use clap::{Parser, Subcommand};

pub mod commands;

/// Skillpack - scaffold, validate, and package skill bundles
#[derive(Parser, Debug)]
#[command(name = "skillpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new skill directory from the descriptor template
    Init(commands::init::InitArgs),

    /// Validate a skill directory and package it into a .skill archive
    Package(commands::package::PackageArgs),
}
