//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for siteconf using clap's derive macros.

use clap::{Parser, Subcommand};

/// Siteconf - Static configuration for a personal blog site
#[derive(Parser)]
#[command(name = "siteconf")]
#[command(version)]
#[command(about = "Manage the blog's static site configuration", long_about = None)]
pub struct Cli {
    /// Override configuration file path (default: site.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an example configuration file
    Init {
        /// Output path (default: site.example.toml)
        output_path: Option<String>,

        /// Force overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the resolved configuration
    Check,

    /// List the social-link registry in display order
    Links {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
