//! `oid generate`

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use oidgen_id::{Engine, Environment, ObjectId};
use tracing::info;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Generate new ObjectIds.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Number of IDs to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Stamp the IDs with this time (RFC 3339) instead of now.
    #[arg(long)]
    at: Option<String>,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let at = self.at.as_deref().map(parse_at).transpose()?;
        let ids = generate_ids(&ctx.engine, self.count, at);
        info!(count = ids.len(), "generated ObjectIds");

        match ctx.format {
            OutputFormat::Json => print_single(&ids),
            OutputFormat::Table => {
                for id in &ids {
                    println!("{id}");
                }
            }
        }

        Ok(())
    }
}

fn parse_at(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CliError::InvalidTimestamp(value.to_string()))
}

fn generate_ids<E: Environment>(
    engine: &Engine<E>,
    count: usize,
    at: Option<DateTime<Utc>>,
) -> Vec<ObjectId> {
    (0..count)
        .map(|_| match at {
            Some(at) => engine.generate_at(at),
            None => engine.generate(),
        })
        .collect()
}
