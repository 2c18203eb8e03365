//! CLI commands.

mod generate;
mod inspect;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oidgen_id::{Engine, HostnameOverride, HostnameSource, SystemEnvironment};
use tracing::debug;

use crate::config::Config;
use crate::output::OutputFormat;

/// Environment used by the CLI: the real machine, with an optional host name
/// override from `OID_HOSTNAME`.
pub type CliEnvironment = HostnameOverride<SystemEnvironment>;

/// oid - generate, inspect, and validate legacy ObjectIds.
#[derive(Debug, Parser)]
#[command(name = "oid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new ObjectIds.
    Generate(generate::GenerateCommand),

    /// Decode the fields of an ObjectId.
    Inspect(inspect::InspectCommand),

    /// Check whether strings are valid ObjectIds.
    Validate(validate::ValidateCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext::new(config, self.format);

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("oid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub engine: Engine<CliEnvironment>,
}

impl CommandContext {
    pub fn new(config: Config, format: OutputFormat) -> Self {
        let hostname = config
            .hostname
            .unwrap_or_else(|| SystemEnvironment.hostname());
        debug!(hostname = %hostname, "using host name for fingerprint");

        Self {
            format,
            engine: Engine::with_environment(HostnameOverride::new(SystemEnvironment, hostname)),
        }
    }
}
