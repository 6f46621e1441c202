//! Rendering partials.
//!
//! Each partial renders one form control group as an HTML fragment from a
//! [`FormContext`]. Partials are plain structs implementing [`Render`];
//! [`Partial`] wraps them for callers that pick the partial at runtime.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;

use crate::core::{FieldOptions, FormContext, FormError, Result};

pub mod display_field;
pub mod html;
pub mod number;
pub mod pass_fail;
pub mod search_field;
pub mod select;
pub mod submit_button;
pub mod text_area;
pub mod text_field;

pub use display_field::DisplayField;
pub use number::NumberField;
pub use pass_fail::PassFail;
pub use search_field::SearchField;
pub use select::Select;
pub use submit_button::SubmitButton;
pub use text_area::TextArea;
pub use text_field::TextField;

/// Renders a partial as an HTML fragment.
#[enum_dispatch]
pub trait Render {
    fn render(&self, ctx: &FormContext<'_>) -> Result<String>;
}

#[enum_dispatch(Render)]
#[derive(Debug, Clone)]
pub enum Partial {
    TextField(TextField),
    NumberField(NumberField),
    TextArea(TextArea),
    PassFail(PassFail),
    Select(Select),
    SearchField(SearchField),
    SubmitButton(SubmitButton),
    DisplayField(DisplayField),
}

/// Partial names, as used in templates and as the descriptor passed to
/// [`composite_fields`](crate::core::composite_fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum PartialKind {
    TextField,
    Number,
    TextArea,
    PassFail,
    PassFailComment,
    PassFailNaComment,
    Select,
    SearchField,
    SubmitButton,
    DisplayField,
}

impl PartialKind {
    pub const ALL: [PartialKind; 10] = [
        PartialKind::TextField,
        PartialKind::Number,
        PartialKind::TextArea,
        PartialKind::PassFail,
        PartialKind::PassFailComment,
        PartialKind::PassFailNaComment,
        PartialKind::Select,
        PartialKind::SearchField,
        PartialKind::SubmitButton,
        PartialKind::DisplayField,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartialKind::TextField => "text_field",
            PartialKind::Number => "number",
            PartialKind::TextArea => "text_area",
            PartialKind::PassFail => "pass_fail",
            PartialKind::PassFailComment => "pass_fail_comment",
            PartialKind::PassFailNaComment => "pass_fail_na_comment",
            PartialKind::Select => "select",
            PartialKind::SearchField => "search_field",
            PartialKind::SubmitButton => "submit_button",
            PartialKind::DisplayField => "display_field",
        }
    }
}

impl fmt::Display for PartialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartialKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        PartialKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormError::UnknownPartial(s.to_string()))
    }
}

impl Partial {
    /// Builds the partial of `kind` for `field`.
    ///
    /// The search field takes `field` as its input name; its URL must be
    /// set separately (see [`SearchField::new`]).
    pub fn from_kind(kind: PartialKind, field: &str, options: FieldOptions) -> Partial {
        match kind {
            PartialKind::TextField => TextField::new(field).with_options(options).into(),
            PartialKind::Number => NumberField::new(field).with_options(options).into(),
            PartialKind::TextArea => TextArea::new(field).with_options(options).into(),
            PartialKind::PassFail => PassFail::new(field).into(),
            PartialKind::PassFailComment => PassFail::with_comment(field).into(),
            PartialKind::PassFailNaComment => PassFail::with_na_comment(field).into(),
            PartialKind::Select => Select::new(field).with_options(options).into(),
            PartialKind::SearchField => SearchField::new("").field_name(field).into(),
            PartialKind::SubmitButton => SubmitButton.into(),
            PartialKind::DisplayField => DisplayField::new(field).into(),
        }
    }
}

/// `<small class="hint">` when a hint exists.
pub(crate) fn hint_html(hint: Option<&str>) -> String {
    match hint {
        Some(hint) => html::Tag::new("small").attr("class", "hint").text(hint).render(),
        None => String::new(),
    }
}

/// Form parameter name: `inspection[height]`.
pub(crate) fn input_name(param_key: &str, field: &str) -> String {
    format!("{}[{}]", param_key, field)
}

/// Element id: `inspection_height`.
pub(crate) fn input_id(param_key: &str, field: &str) -> String {
    format!("{}_{}", param_key, field)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{MessageCatalog, Record};

    pub fn catalog() -> MessageCatalog {
        MessageCatalog::from_json(
            r#"{
                "forms": {
                    "inspection": {
                        "fields": {
                            "name": "Name",
                            "phone": "Phone",
                            "height": "Height",
                            "status": "Status",
                            "ropes": "Ropes",
                            "notes": "Notes",
                            "email": "Email"
                        },
                        "submit": "Save Inspection"
                    },
                    "hints": { "height": "In metres" },
                    "placeholders": { "height": "0.0", "notes": "Anything else?" }
                },
                "shared": {
                    "pass": "Pass",
                    "fail": "Fail",
                    "not_applicable": "Not Applicable",
                    "comment": "Comment",
                    "field_comment_placeholder": "Comment on %{field}"
                }
            }"#,
        )
        .unwrap()
    }

    pub fn inspection() -> Record {
        Record::new("Inspection").with_id(7)
    }
}
