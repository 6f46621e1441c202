use anyhow::{Result, bail};

use super::super::args::RenderCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::FormSession;
use crate::core::{FieldOptions, Result as FormResult};
use crate::render::{Partial, PartialKind, Render, SearchField, Select};

pub fn render(cmd: RenderCommand) -> Result<ExitStatus> {
    let session = FormSession::load(&cmd.form, &cmd.common)?;
    let ctx = session.context();

    let partial = match build_partial(&cmd, &session) {
        Ok(Some(partial)) => partial,
        Ok(None) => bail!("a field name is required for {}", cmd.partial),
        Err(err) => {
            report::print_failure(&err);
            return Ok(ExitStatus::Failure);
        }
    };

    match partial.render(&ctx) {
        Ok(html) => {
            println!("{}", html);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            report::print_failure(&err);
            Ok(ExitStatus::Failure)
        }
    }
}

/// `None` when the partial needs a field and none was given.
fn build_partial(cmd: &RenderCommand, session: &FormSession) -> FormResult<Option<Partial>> {
    let options = FieldOptions::from_json(&session.options)?;

    let partial: Partial = match (cmd.partial, cmd.field.as_deref()) {
        (PartialKind::SubmitButton, _) => Partial::from_kind(cmd.partial, "", options),
        (PartialKind::SearchField, field) => {
            SearchField::new(cmd.url.clone().unwrap_or_default())
                .field_name(field.unwrap_or("query"))
                .value(cmd.query.clone())
                .into()
        }
        (PartialKind::Select, Some(field)) => {
            let mut select = Select::new(field)
                .with_options(options)
                .combobox(cmd.combobox);
            if let Some(prompt) = &cmd.prompt {
                select = select.prompt(prompt);
            }
            select.into()
        }
        (kind, Some(field)) => Partial::from_kind(kind, field, options),
        (_, None) => return Ok(None),
    };
    Ok(Some(partial))
}
