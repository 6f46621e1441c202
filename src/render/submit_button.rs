use crate::core::{FormContext, Result};
use crate::render::Render;
use crate::render::html::Tag;

/// Submit input labelled by the required `{i18n_base}.submit` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitButton;

impl Render for SubmitButton {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        ctx.form()?;
        let i18n_base = ctx.i18n_base()?;
        let text = ctx.translator().translate(&format!("{}.submit", i18n_base))?;

        Ok(Tag::new("input")
            .attr("type", "submit")
            .attr("name", "commit")
            .attr("value", text)
            .void())
    }
}
