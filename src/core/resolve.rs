//! Field value resolution with prefill from a previous record.
//!
//! Resolution order for a field:
//! 1. Password-like fields resolve to nothing, without touching either record
//! 2. The current value is read (bare name first, then `{field}_pass`)
//! 3. Fields in the exclusion set keep the current value, never prefilled
//! 4. A non-null current value wins, even when falsy
//! 5. Otherwise the previous record's value is used, flagged as prefilled

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::core::error::{FormError, Result};
use crate::core::field::PASS_SUFFIX;
use crate::core::model::Model;
use crate::core::value::{FieldValue, format_numeric_value};

const SENSITIVE_MARKER: &str = "password";

/// Resolved value of one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    pub value: FieldValue,
    /// True only when the current record held nothing and the value was
    /// carried over from the previous record.
    pub prefilled: bool,
}

impl Resolution {
    fn current(value: FieldValue) -> Self {
        Self {
            value,
            prefilled: false,
        }
    }
}

/// Fields that are never prefilled from a previous record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, field: impl Into<String>) {
        self.0.insert(field.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Reads `field` from `model`, falling back to `{field}_pass`.
///
/// The bare attribute is checked first so fields that carry both a measured
/// value and a pass flag (`step_size`, `step_size_pass`) read the value.
/// With `strict`, a model exposing neither attribute is an error listing
/// what it does expose; otherwise the result is `Null`.
pub fn field_value_from_model(model: &dyn Model, field: &str, strict: bool) -> Result<FieldValue> {
    if model.has_field(field) {
        return Ok(model.field(field));
    }

    let suffixed = format!("{}{}", field, PASS_SUFFIX);
    if model.has_field(&suffixed) {
        debug!(field, attribute = %suffixed, "reading pass attribute");
        return Ok(model.field(&suffixed));
    }

    if strict {
        let mut available = model.attribute_names();
        available.sort();
        return Err(FormError::FieldNotFound {
            field: field.to_string(),
            suffixed,
            model: model.type_name().to_string(),
            available,
        });
    }

    Ok(FieldValue::Null)
}

/// Resolves field values against a previous record and an exclusion set.
#[derive(Clone, Copy)]
pub struct FieldResolver<'a> {
    previous: Option<&'a dyn Model>,
    excluded: &'a ExclusionSet,
}

impl<'a> FieldResolver<'a> {
    pub fn new(previous: Option<&'a dyn Model>, excluded: &'a ExclusionSet) -> Self {
        Self { previous, excluded }
    }

    /// Resolves the display value of `field` on `current`.
    ///
    /// Fails with [`FormError::FieldNotFound`] when `current` has neither
    /// `field` nor `{field}_pass`.
    pub fn resolve(&self, current: &dyn Model, field: &str) -> Result<Resolution> {
        if field.contains(SENSITIVE_MARKER) {
            debug!(field, "sensitive field, skipping resolution");
            return Ok(Resolution::default());
        }

        let current_value = field_value_from_model(current, field, true)?;

        if self.excluded.contains(field) {
            debug!(field, "field excluded from prefill");
            return Ok(Resolution::current(current_value));
        }

        if !current_value.is_null() {
            return Ok(Resolution::current(current_value));
        }

        let previous_value = self.previous_value(current, field);
        if previous_value.is_null() {
            return Ok(Resolution::default());
        }

        debug!(field, "prefilled from previous record");
        Ok(Resolution {
            value: format_numeric_value(previous_value),
            prefilled: true,
        })
    }

    /// Value of `field` on the previous record.
    ///
    /// Assessments live under a named child of the previous record (an
    /// `Assessments::SlideAssessment` reads `previous.slide_assessment`);
    /// other records are read directly. Absence anywhere yields `Null`.
    pub fn previous_value(&self, current: &dyn Model, field: &str) -> FieldValue {
        let Some(previous) = self.previous else {
            return FieldValue::Null;
        };

        if current.is_assessment() {
            let name = current.param_key();
            return match previous.sub_record(&name) {
                Some(previous_model) => field_value_from_model(previous_model, field, false)
                    .unwrap_or_default(),
                None => FieldValue::Null,
            };
        }

        previous.field(field)
    }
}
