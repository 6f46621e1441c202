//! Form rendering context.
//!
//! Everything a partial needs to resolve a field is passed explicitly: the
//! record being edited, the i18n namespace of the form, the previous record
//! used for prefill, the exclusion set and the translation catalog.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::{FormError, Result};
use crate::core::field::COMMENT_SUFFIX;
use crate::core::model::Model;
use crate::core::options::FieldOptions;
use crate::core::resolve::{ExclusionSet, FieldResolver, Resolution};
use crate::core::translate::{Translator, build_label_set};
use crate::core::value::FieldValue;

static NO_EXCLUSIONS: ExclusionSet = ExclusionSet::new();

/// Translation key of the comment textarea placeholder, with `%{field}`.
pub const COMMENT_PLACEHOLDER_KEY: &str = "shared.field_comment_placeholder";

const COMMENT_ROWS: u32 = 2;

/// Resolved metadata and value for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSetup {
    pub field: String,
    pub i18n_base: String,
    pub value: FieldValue,
    pub prefilled: bool,
    pub label: String,
    pub hint: Option<String>,
    pub placeholder: Option<String>,
}

/// Display options for the comment box attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentOptions {
    pub rows: u32,
    pub placeholder: String,
    pub textarea_id: String,
    pub checkbox_id: String,
    /// Inline style toggling the textarea: `display: block;` or `display: none;`.
    pub style: String,
    pub value: FieldValue,
    pub prefilled: bool,
    pub has_comment: bool,
}

#[derive(Clone, Copy)]
pub struct FormContext<'a> {
    translator: &'a dyn Translator,
    form: Option<&'a dyn Model>,
    i18n_base: Option<&'a str>,
    previous: Option<&'a dyn Model>,
    excluded: &'a ExclusionSet,
}

impl<'a> FormContext<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self {
            translator,
            form: None,
            i18n_base: None,
            previous: None,
            excluded: &NO_EXCLUSIONS,
        }
    }

    pub fn with_form(mut self, form: &'a dyn Model) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_i18n_base(mut self, i18n_base: &'a str) -> Self {
        self.i18n_base = Some(i18n_base);
        self
    }

    pub fn with_previous(mut self, previous: Option<&'a dyn Model>) -> Self {
        self.previous = previous;
        self
    }

    pub fn with_excluded(mut self, excluded: &'a ExclusionSet) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn translator(&self) -> &'a dyn Translator {
        self.translator
    }

    pub fn form(&self) -> Result<&'a dyn Model> {
        self.form.ok_or(FormError::MissingContext("form object"))
    }

    pub fn i18n_base(&self) -> Result<&'a str> {
        self.i18n_base.ok_or(FormError::MissingContext("i18n base"))
    }

    pub fn resolver(&self) -> FieldResolver<'a> {
        FieldResolver::new(self.previous, self.excluded)
    }

    /// Value and prefill flag of `field` on the current form record.
    ///
    /// Without a form record there is nothing to resolve.
    pub fn resolve(&self, field: &str) -> Result<Resolution> {
        match self.form {
            Some(form) => self.resolver().resolve(form, field),
            None => Ok(Resolution::default()),
        }
    }

    /// Labels, value and prefill state for `field`.
    pub fn field_setup(&self, field: &str) -> Result<FieldSetup> {
        let i18n_base = self.i18n_base()?;
        self.form()?;

        let labels = build_label_set(self.translator, field, i18n_base)?;
        let Resolution { value, prefilled } = self.resolve(field)?;

        Ok(FieldSetup {
            field: field.to_string(),
            i18n_base: i18n_base.to_string(),
            value,
            prefilled,
            label: labels.label,
            hint: labels.hint,
            placeholder: labels.placeholder,
        })
    }

    /// [`field_setup`](Self::field_setup) for options supplied as loose JSON.
    ///
    /// The options are checked against the allow-list before anything else.
    pub fn field_setup_with_options(
        &self,
        field: &str,
        options: &Map<String, Value>,
    ) -> Result<(FieldSetup, FieldOptions)> {
        let options = FieldOptions::from_json(options)?;
        let setup = self.field_setup(field)?;
        Ok((setup, options))
    }

    /// Options for the comment textarea attached to `comment_field`.
    ///
    /// Element ids are scoped to the record so several forms can share a
    /// page. The textarea starts visible only when a comment exists.
    pub fn comment_field_options(
        &self,
        comment_field: &str,
        base_field_label: &str,
    ) -> Result<CommentOptions> {
        let form = self.form()?;
        let Resolution { value, prefilled } = self.resolve(comment_field)?;

        let has_comment = value.is_present();
        let base_field = comment_field
            .strip_suffix(COMMENT_SUFFIX)
            .unwrap_or(comment_field);
        let record_id = form.record_id();

        let placeholder = self
            .translator
            .translate_with(COMMENT_PLACEHOLDER_KEY, &[("field", base_field_label)])?;
        let display = if has_comment { "block" } else { "none" };

        Ok(CommentOptions {
            rows: COMMENT_ROWS,
            placeholder,
            textarea_id: format!("{}_comment_textarea_{}", base_field, record_id),
            checkbox_id: format!("{}_has_comment_{}", base_field, record_id),
            style: format!("display: {};", display),
            value,
            prefilled,
            has_comment,
        })
    }
}

/// Whether a radio button should be pre-checked from a prefilled value.
///
/// Only prefilled values check a radio here; a value already saved on the
/// record is checked by the form builder itself.
pub fn radio_button_options(prefilled: bool, checked_value: &FieldValue, expected: &FieldValue) -> bool {
    prefilled && checked_value == expected
}
