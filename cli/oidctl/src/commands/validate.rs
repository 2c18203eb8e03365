//! `oid validate`

use anyhow::Result;
use clap::Args;
use oidgen_id::ObjectId;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_failure, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Check whether strings are valid ObjectIds.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Candidate IDs.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ValidationResult {
    input: String,
    valid: bool,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let results = check(self.ids);

        match ctx.format {
            OutputFormat::Json => print_single(&results),
            OutputFormat::Table => {
                for r in &results {
                    if r.valid {
                        print_success(&r.input);
                    } else {
                        print_failure(&r.input);
                    }
                }
            }
        }

        let invalid = results.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidIds {
                count: invalid,
                total: results.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn check(ids: Vec<String>) -> Vec<ValidationResult> {
    ids.into_iter()
        .map(|input| ValidationResult {
            valid: ObjectId::is_valid(&input),
            input,
        })
        .collect()
}
