use crate::core::{FieldOptions, FormContext, Result};
use crate::render::html::{Tag, class_list};
use crate::render::{Render, hint_html, input_id, input_name};

const DEFAULT_INPUT_TYPE: &str = "text";

/// Label, single-line input and hint.
#[derive(Debug, Clone)]
pub struct TextField {
    pub field: String,
    pub options: FieldOptions,
}

impl TextField {
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

impl Render for TextField {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        let setup = ctx.field_setup(&self.field)?;
        let param_key = ctx.form()?.param_key();
        let id = input_id(&param_key, &self.field);

        let label = Tag::new("label")
            .attr("for", &id)
            .text(&setup.label)
            .render();

        let value = (!setup.value.is_null()).then(|| setup.value.to_string());
        let input = Tag::new("input")
            .attr(
                "type",
                self.options.input_type.as_deref().unwrap_or(DEFAULT_INPUT_TYPE),
            )
            .attr("name", input_name(&param_key, &self.field))
            .attr("id", &id)
            .attr_opt("value", value)
            .attr_opt("placeholder", setup.placeholder.as_deref())
            .attr_opt("accept", self.options.accept.as_deref())
            .attr_opt("class", setup.prefilled.then_some("prefilled"))
            .flag("required", self.options.required)
            .void();

        Ok(Tag::new("div")
            .attr("class", class_list(["form-grid", "text-field"]))
            .child(label)
            .child(input)
            .child(hint_html(setup.hint.as_deref()))
            .render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FormContext, Record};
    use crate::render::test_support::{catalog, inspection};
    use insta::assert_snapshot;
    use serde_json::Value;

    #[test]
    fn test_renders_current_value() {
        let catalog = catalog();
        let record = inspection().with_attr("name", "Bouncy Castle");
        let ctx = FormContext::new(&catalog)
            .with_form(&record)
            .with_i18n_base("forms.inspection");

        let html = TextField::new("name").render(&ctx).unwrap();
        assert_snapshot!(html, @r#"<div class="form-grid text-field"><label for="inspection_name">Name</label><input type="text" name="inspection[name]" id="inspection_name" value="Bouncy Castle" /></div>"#);
    }

    #[test]
    fn test_prefilled_value_is_marked() {
        let catalog = catalog();
        let record = inspection().with_attr("email", Value::Null);
        let previous = Record::new("Inspection").with_attr("email", "ops@example.com");
        let ctx = FormContext::new(&catalog)
            .with_form(&record)
            .with_previous(Some(&previous))
            .with_i18n_base("forms.inspection");

        let options = FieldOptions {
            input_type: Some("email".to_string()),
            required: true,
            ..FieldOptions::default()
        };
        let html = TextField::new("email")
            .with_options(options)
            .render(&ctx)
            .unwrap();
        assert_snapshot!(html, @r#"<div class="form-grid text-field"><label for="inspection_email">Email</label><input type="email" name="inspection[email]" id="inspection_email" value="ops@example.com" class="prefilled" required /></div>"#);
    }

    #[test]
    fn test_password_value_is_never_echoed() {
        let catalog = catalog();
        let record = inspection().with_attr("password", "hunter2");
        let ctx = FormContext::new(&catalog)
            .with_form(&record)
            .with_i18n_base("forms.inspection");

        // No label for the password field in the catalog
        assert!(TextField::new("password").render(&ctx).is_err());

        let mut catalog = catalog;
        catalog.insert("forms.inspection.fields.password", "Password");
        let ctx = FormContext::new(&catalog)
            .with_form(&record)
            .with_i18n_base("forms.inspection");
        let html = TextField::new("password").render(&ctx).unwrap();
        assert!(!html.contains("hunter2"));
    }
}
