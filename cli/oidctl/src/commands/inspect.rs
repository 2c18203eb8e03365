//! `oid inspect`

use anyhow::Result;
use clap::Args;
use oidgen_id::{ObjectId, ObjectIdFields};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_single, print_table, OutputFormat};

use super::CommandContext;

/// Decode the fields of an ObjectId.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// The 24-character ObjectId.
    id: String,
}

#[derive(Debug, Serialize)]
struct InspectView {
    id: ObjectId,
    generation_time: String,
    #[serde(flatten)]
    fields: ObjectIdFields,
}

#[derive(Debug, Tabled)]
struct FieldRow {
    field: &'static str,
    hex: String,
    value: String,
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = ObjectId::parse(&self.id).map_err(CliError::from)?;

        match ctx.format {
            OutputFormat::Json => print_single(&InspectView {
                generation_time: id.generation_time().to_rfc3339(),
                fields: id.fields(),
                id,
            }),
            OutputFormat::Table => print_table(&field_rows(&id)),
        }

        Ok(())
    }
}

fn field_rows(id: &ObjectId) -> Vec<FieldRow> {
    let fields = id.fields();
    let values = [
        format!("{} ({})", fields.timestamp, id.generation_time().to_rfc3339()),
        fields.host_fingerprint.to_string(),
        fields.process_id.to_string(),
        fields.increment.to_string(),
    ];

    ["timestamp", "host", "pid", "counter"]
        .into_iter()
        .zip(id.segments())
        .zip(values)
        .map(|((field, hex), value)| FieldRow {
            field,
            hex: hex.to_string(),
            value,
        })
        .collect()
}
