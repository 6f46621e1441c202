//! Field name conventions.
//!
//! Field identifiers carry meaning through their suffix:
//! - `ropes_pass` is the pass/fail outcome of the `ropes` check
//! - `ropes_comment` is the free-text note attached to it
//!
//! Partials that render several sibling inputs (a pass/fail radio group with
//! a comment box) derive the concrete names with [`composite_fields`].

use crate::core::error::Result;
use crate::core::translate::Translator;

pub const PASS_SUFFIX: &str = "_pass";
pub const COMMENT_SUFFIX: &str = "_comment";

const ASSESSMENT_SUFFIX: &str = "_assessment";

/// Removes a trailing `_pass` or `_comment` suffix.
///
/// Only the last suffix is removed: `x_comment_pass` strips to `x_comment`,
/// the field the pass flag belongs to. Stripping a bare name is a no-op.
///
/// ```
/// use formfill::core::strip_field_suffix;
///
/// assert_eq!(strip_field_suffix("ropes_pass"), "ropes");
/// assert_eq!(strip_field_suffix("ropes_comment"), "ropes");
/// assert_eq!(strip_field_suffix("passenger_count"), "passenger_count");
/// ```
pub fn strip_field_suffix(field: &str) -> &str {
    field
        .strip_suffix(PASS_SUFFIX)
        .or_else(|| field.strip_suffix(COMMENT_SUFFIX))
        .unwrap_or(field)
}

pub fn is_pass_field(field: &str) -> bool {
    field.ends_with(PASS_SUFFIX)
}

pub fn is_comment_field(field: &str) -> bool {
    field.ends_with(COMMENT_SUFFIX)
}

pub fn is_composite_field(field: &str) -> bool {
    is_pass_field(field) || is_comment_field(field)
}

pub fn base_field_name(field: &str) -> &str {
    strip_field_suffix(field)
}

/// Sibling fields a partial must address for `field`.
///
/// `partial` is a partial kind descriptor such as `pass_fail_comment`. The
/// pass entry, if any, always precedes the comment entry.
pub fn composite_fields(field: &str, partial: &str) -> Vec<String> {
    let mut fields = Vec::new();

    if partial.contains("pass_fail") && !is_pass_field(field) {
        fields.push(format!("{}{}", field, PASS_SUFFIX));
    }

    if partial.contains("comment") {
        let base = if is_pass_field(field) {
            strip_field_suffix(field)
        } else {
            field
        };
        fields.push(format!("{}{}", base, COMMENT_SUFFIX));
    }

    fields
}

/// Label for `field` in the `forms.{form}` namespace. The key is required.
pub fn form_field_label(translator: &dyn Translator, form: &str, field: &str) -> Result<String> {
    translator.translate(&format!("forms.{}.fields.{}", form, field))
}

/// `slide_assessment` -> `slide`
pub fn form_name_from_assessment(assessment_key: &str) -> &str {
    assessment_key
        .strip_suffix(ASSESSMENT_SUFFIX)
        .unwrap_or(assessment_key)
}
