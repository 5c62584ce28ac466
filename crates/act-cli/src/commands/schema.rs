use act_core::schema::{PayloadKind, payload_schema};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

/// Handle `act schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = match args.kind {
        SchemaKind::Input => PayloadKind::Input,
        SchemaKind::Export => PayloadKind::Export,
    };
    output(&payload_schema(kind)?, flags.format)
}
