use serde_json::Value;

use crate::core::{FieldOptions, FieldValue, FormContext, Result, strip_trailing_zeros};
use crate::render::html::{Tag, class_list};
use crate::render::{Render, hint_html, input_id, input_name};

const DEFAULT_STEP: f64 = 0.1;

/// Key of the label next to the "not applicable" checkbox.
pub const NOT_APPLICABLE_KEY: &str = "shared.not_applicable";

/// Label and number input, optionally followed by an N/A checkbox.
///
/// The checkbox sits in a `label.na-label` directly after the input; the
/// client-side toggle disables the input and sets it to `0` while checked.
#[derive(Debug, Clone)]
pub struct NumberField {
    pub field: String,
    pub options: FieldOptions,
}

impl NumberField {
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

impl Render for NumberField {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        let setup = ctx.field_setup(&self.field)?;
        let param_key = ctx.form()?.param_key();
        let id = input_id(&param_key, &self.field);

        let label = Tag::new("label")
            .attr("for", &id)
            .text(&setup.label)
            .render();

        let mut input = Tag::new("input")
            .attr("type", "number")
            .attr("name", input_name(&param_key, &self.field))
            .attr("id", &id)
            .attr("class", class_list(["number", prefilled_class(setup.prefilled)]))
            .attr("step", self.options.step.unwrap_or(DEFAULT_STEP))
            .attr_opt("min", self.options.min)
            .attr_opt("max", self.options.max)
            .attr_opt("placeholder", setup.placeholder.as_deref())
            .attr_opt("value", strip_trailing_zeros(&setup.value))
            .flag("required", self.options.required);

        if let Some(extra) = &self.options.number_options {
            for (name, value) in extra {
                input = extra_attribute(input, name, value);
            }
        }

        let mut group = Tag::new("div")
            .attr("class", class_list(["form-grid", "number"]))
            .child(label)
            .child(input.void());

        if self.options.add_not_applicable {
            let na_text = ctx.translator().translate(NOT_APPLICABLE_KEY)?;
            let checkbox = Tag::new("input")
                .attr("type", "checkbox")
                .attr("id", format!("{}_na", id))
                .flag("checked", is_zero(&setup.value))
                .void();
            group = group.child(
                Tag::new("label")
                    .attr("class", "na-label")
                    .attr("for", format!("{}_na", id))
                    .child(checkbox)
                    .text(&format!(" {}", na_text))
                    .render(),
            );
        }

        Ok(group.child(hint_html(setup.hint.as_deref())).render())
    }
}

fn prefilled_class(prefilled: bool) -> &'static str {
    if prefilled { "prefilled" } else { "" }
}

fn is_zero(value: &FieldValue) -> bool {
    match value {
        FieldValue::Int(i) => *i == 0,
        FieldValue::Float(f) => *f == 0.0,
        FieldValue::Text(s) => s == "0",
        _ => false,
    }
}

/// Attribute names come from option keys, which are known statically only
/// for the common ones.
fn extra_attribute(input: Tag, name: &str, value: &Value) -> Tag {
    let name: &'static str = match name {
        "inputmode" => "inputmode",
        "pattern" => "pattern",
        "title" => "title",
        "autocomplete" => "autocomplete",
        "readonly" => "readonly",
        "disabled" => "disabled",
        _ => return input,
    };
    match value {
        Value::Bool(on) => input.flag(name, *on),
        Value::String(s) => input.attr(name, s),
        Value::Null => input,
        other => input.attr(name, other),
    }
}
