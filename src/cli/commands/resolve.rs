use anyhow::Result;
use tracing::debug;

use super::super::args::ResolveCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::FormSession;

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let session = FormSession::load(&cmd.form, &cmd.common)?;
    let ctx = session.context();

    let resolved = if session.options.is_empty() {
        ctx.field_setup(&cmd.field)
    } else {
        ctx.field_setup_with_options(&cmd.field, &session.options)
            .map(|(setup, _)| setup)
    };

    let setup = match resolved {
        Ok(setup) => setup,
        Err(err) => {
            report::print_failure(&err);
            return Ok(ExitStatus::Failure);
        }
    };
    debug!(field = %setup.field, prefilled = setup.prefilled, "resolved field");

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&setup)?);
    } else {
        report::print_setup(&setup);
    }
    Ok(ExitStatus::Success)
}
