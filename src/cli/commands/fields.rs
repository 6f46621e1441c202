use anyhow::Result;

use super::super::args::FieldsCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::core::composite_fields;

/// List the sibling fields addressed by `partial` for `field`.
pub fn fields(cmd: FieldsCommand) -> Result<ExitStatus> {
    let fields = composite_fields(&cmd.field, &cmd.partial);
    report::print_fields(&fields);
    Ok(ExitStatus::Success)
}
