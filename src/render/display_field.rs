use crate::core::{FormContext, Result, build_label_set, field_value_from_model};
use crate::render::Render;
use crate::render::html::Tag;

/// Read-only label and value. Never prefilled.
#[derive(Debug, Clone)]
pub struct DisplayField {
    pub field: String,
}

impl DisplayField {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Render for DisplayField {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        let form = ctx.form()?;
        let labels = build_label_set(ctx.translator(), &self.field, ctx.i18n_base()?)?;
        let value = field_value_from_model(form, &self.field, true)?;

        Ok(Tag::new("div")
            .attr("class", "form-grid display-field")
            .child(Tag::new("label").text(&labels.label).render())
            .child(Tag::new("p").text(&value.to_string()).render())
            .render())
    }
}
