//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Binary complement calculator: one's and two's complement with decimal values
#[derive(Parser, Debug)]
#[command(name = "bincomp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Extra config file, layered above the global config
    #[arg(short, long, global = true, env = "BINCOMP_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one's and two's complement of a binary number
    Calc {
        /// Unsigned binary number, e.g. 0101
        binary: String,

        /// Do not print the steps
        #[arg(long)]
        no_steps: bool,
    },

    /// Add two binary numbers
    Add {
        /// First operand
        a: String,
        /// Second operand
        b: String,
    },

    /// Read binary numbers line by line and show results
    Interactive,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template in the global location
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}

