use crate::core::{FieldOptions, FormContext, Result, SelectOption};
use crate::render::html::Tag;
use crate::render::{Render, hint_html, input_id, input_name};

/// Label and a `<select>`, or a text input backed by a `<datalist>` in
/// combobox mode.
#[derive(Debug, Clone)]
pub struct Select {
    pub field: String,
    pub options: FieldOptions,
    /// Leading blank option text.
    pub prompt: Option<String>,
    /// Free text with suggestions instead of a closed list.
    pub combobox: bool,
}

impl Select {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            options: FieldOptions::default(),
            prompt: None,
            combobox: false,
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn combobox(mut self, combobox: bool) -> Self {
        self.combobox = combobox;
        self
    }

    fn choices(&self) -> &[SelectOption] {
        self.options.options.as_deref().unwrap_or_default()
    }
}

impl Render for Select {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        let setup = ctx.field_setup(&self.field)?;
        let form = ctx.form()?;
        let param_key = form.param_key();
        let id = input_id(&param_key, &self.field);
        let current = (!setup.value.is_null()).then(|| setup.value.to_string());

        let label = Tag::new("label")
            .attr("for", &id)
            .text(&setup.label)
            .render();

        let control = if self.combobox {
            let list_id = format!("{}_datalist_{}", self.field, form.record_id());
            let input = Tag::new("input")
                .attr("type", "text")
                .attr("name", input_name(&param_key, &self.field))
                .attr("id", &id)
                .attr("list", &list_id)
                .attr_opt("value", current)
                .flag("required", self.options.required)
                .void();
            let options = self.choices().iter().map(|choice| {
                Tag::new("option")
                    .attr("value", &choice.value)
                    .text(&choice.label)
                    .render()
            });
            let datalist = Tag::new("datalist")
                .attr("id", &list_id)
                .children(options)
                .render();
            format!("{}{}", input, datalist)
        } else {
            let prompt = self
                .prompt
                .as_deref()
                .map(|p| Tag::new("option").attr("value", "").text(p).render());
            let options = self.choices().iter().map(|choice| {
                Tag::new("option")
                    .attr("value", &choice.value)
                    .flag("selected", current.as_deref() == Some(choice.value.as_str()))
                    .text(&choice.label)
                    .render()
            });
            Tag::new("select")
                .attr("name", input_name(&param_key, &self.field))
                .attr("id", &id)
                .attr_opt("class", setup.prefilled.then_some("prefilled"))
                .flag("required", self.options.required)
                .children(prompt)
                .children(options)
                .render()
        };

        Ok(Tag::new("div")
            .attr("class", "form-grid select")
            .child(label)
            .child(control)
            .child(hint_html(setup.hint.as_deref()))
            .render())
    }
}
