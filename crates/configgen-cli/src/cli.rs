//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration generator using AI.YOU.
///
/// Creates YAML configurations for various types of IT infrastructure.
#[derive(Debug, Parser)]
#[command(name = "configgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default is ~/.configgen/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// AI.YOU email
    #[arg(long, global = true, env = "CONFIGGEN_EMAIL")]
    pub email: Option<String>,

    /// AI.YOU password
    #[arg(long, global = true, env = "CONFIGGEN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// AI.YOU assistant ID
    #[arg(long, global = true, env = "CONFIGGEN_ASSISTANT")]
    pub assistant: Option<String>,

    /// Enable debug mode
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable status messages
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a YAML configuration file based on machine type and context
    Generate(GenerateArgs),
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Type of machine (router, switch, firewall, server)
    #[arg(long = "type")]
    pub device_type: String,

    /// Context description in natural language
    #[arg(long)]
    pub context: String,

    /// Path to JSON schema file
    #[arg(long)]
    pub schema: PathBuf,

    /// Directory the configuration file is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}
