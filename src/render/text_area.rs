use crate::core::{FieldOptions, FormContext, Result};
use crate::render::html::Tag;
use crate::render::{Render, hint_html, input_id, input_name};

const DEFAULT_ROWS: u32 = 4;

/// Label, multi-line textarea and hint.
#[derive(Debug, Clone)]
pub struct TextArea {
    pub field: String,
    pub options: FieldOptions,
}

impl TextArea {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            options: FieldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }
}

impl Render for TextArea {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        let setup = ctx.field_setup(&self.field)?;
        let param_key = ctx.form()?.param_key();
        let id = input_id(&param_key, &self.field);

        let label = Tag::new("label")
            .attr("for", &id)
            .text(&setup.label)
            .render();

        let textarea = Tag::new("textarea")
            .attr("name", input_name(&param_key, &self.field))
            .attr("id", &id)
            .attr("rows", self.options.rows.unwrap_or(DEFAULT_ROWS))
            .attr_opt("placeholder", setup.placeholder.as_deref())
            .attr_opt("class", setup.prefilled.then_some("prefilled"))
            .flag("required", self.options.required)
            .text(&setup.value.to_string())
            .render();

        Ok(Tag::new("div")
            .attr("class", "form-grid text-area")
            .child(label)
            .child(textarea)
            .child(hint_html(setup.hint.as_deref()))
            .render())
    }
}
