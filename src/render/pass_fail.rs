//! Pass/fail radio groups, optionally with N/A and a comment box.

use crate::core::{
    FieldValue, FormContext, Result, composite_fields, is_comment_field, is_pass_field,
    radio_button_options,
};
use crate::render::html::{Tag, class_list};
use crate::render::{PartialKind, Render, hint_html, input_id, input_name};

const PASS_KEY: &str = "shared.pass";
const FAIL_KEY: &str = "shared.fail";
const NOT_APPLICABLE_KEY: &str = "shared.not_applicable";
const COMMENT_KEY: &str = "shared.comment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassFailVariant {
    /// `true` / `false` radios.
    Plain,
    /// `true` / `false` radios and a comment box.
    Comment,
    /// `pass` / `fail` / `na` radios and a comment box.
    NaComment,
}

#[derive(Debug, Clone)]
pub struct PassFail {
    pub field: String,
    pub variant: PassFailVariant,
}

impl PassFail {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            variant: PassFailVariant::Plain,
        }
    }

    pub fn with_comment(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            variant: PassFailVariant::Comment,
        }
    }

    pub fn with_na_comment(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            variant: PassFailVariant::NaComment,
        }
    }

    pub fn kind(&self) -> PartialKind {
        match self.variant {
            PassFailVariant::Plain => PartialKind::PassFail,
            PassFailVariant::Comment => PartialKind::PassFailComment,
            PassFailVariant::NaComment => PartialKind::PassFailNaComment,
        }
    }

    /// Radio values paired with the translation key of their label.
    fn choices(&self) -> &'static [(&'static str, &'static str)] {
        match self.variant {
            PassFailVariant::Plain | PassFailVariant::Comment => {
                &[("true", PASS_KEY), ("false", FAIL_KEY)]
            }
            PassFailVariant::NaComment => &[
                ("pass", PASS_KEY),
                ("fail", FAIL_KEY),
                ("na", NOT_APPLICABLE_KEY),
            ],
        }
    }
}

impl Render for PassFail {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String> {
        let form = ctx.form()?;
        let param_key = form.param_key();

        let composites = composite_fields(&self.field, self.kind().as_str());
        let comment_field = composites.iter().find(|f| is_comment_field(f));

        // The radios bind to the bare attribute when the model has one
        let pass_field = match self.variant {
            PassFailVariant::Plain => self.field.clone(),
            _ if is_pass_field(&self.field) || form.has_field(&self.field) => self.field.clone(),
            _ => composites
                .iter()
                .find(|f| is_pass_field(f))
                .cloned()
                .unwrap_or_else(|| self.field.clone()),
        };

        let setup = ctx.field_setup(&pass_field)?;
        let chosen = if setup.value.is_null() {
            FieldValue::Null
        } else {
            FieldValue::Text(setup.value.to_string())
        };

        let mut radios = Vec::new();
        for (value, key) in self.choices() {
            let text = ctx.translator().translate(key)?;
            let expected = FieldValue::from(*value);
            let checked = if setup.prefilled {
                radio_button_options(true, &chosen, &expected)
            } else {
                chosen == expected
            };
            let id = input_id(&param_key, &format!("{}_{}", pass_field, value));

            let radio = Tag::new("input")
                .attr("type", "radio")
                .attr("name", input_name(&param_key, &pass_field))
                .attr("id", &id)
                .attr("value", value)
                .flag("checked", checked)
                .void();
            radios.push(
                Tag::new("label")
                    .attr("for", &id)
                    .child(radio)
                    .text(&format!(" {}", text))
                    .render(),
            );
        }

        let group_class = match self.variant {
            PassFailVariant::Plain => "pass-fail",
            _ => "radio-comment",
        };
        let prefilled_class = if setup.prefilled { "prefilled" } else { "" };

        let mut group = Tag::new("div")
            .attr("class", class_list(["form-grid", group_class, prefilled_class]))
            .child(Tag::new("label").text(&setup.label).render())
            .child(
                Tag::new("div")
                    .attr("class", "radio-group")
                    .children(radios)
                    .render(),
            )
            .child(hint_html(setup.hint.as_deref()));

        if let Some(comment_field) = comment_field {
            group = group.child(render_comment(ctx, &param_key, comment_field, &setup.label)?);
        }

        Ok(group.render())
    }
}

/// Checkbox toggling a comment textarea that starts hidden when empty.
fn render_comment(
    ctx: &FormContext<'_>,
    param_key: &str,
    comment_field: &str,
    base_label: &str,
) -> Result<String> {
    let options = ctx.comment_field_options(comment_field, base_label)?;
    let toggle_text = ctx.translator().translate(COMMENT_KEY)?;

    let checkbox = Tag::new("input")
        .attr("type", "checkbox")
        .attr("id", &options.checkbox_id)
        .attr("data-comment-target", &options.textarea_id)
        .flag("checked", options.has_comment)
        .void();
    let toggle = Tag::new("label")
        .attr("class", "comment-toggle")
        .attr("for", &options.checkbox_id)
        .child(checkbox)
        .text(&format!(" {}", toggle_text))
        .render();

    let textarea = Tag::new("textarea")
        .attr("name", input_name(param_key, comment_field))
        .attr("id", &options.textarea_id)
        .attr("rows", options.rows)
        .attr("placeholder", &options.placeholder)
        .attr("style", &options.style)
        .attr_opt("class", options.prefilled.then_some("prefilled"))
        .text(&options.value.to_string())
        .render();

    Ok(Tag::new("div")
        .attr("class", "comment-section")
        .child(toggle)
        .child(textarea)
        .render())
}
