//! Per-field render options.
//!
//! Partials accept a closed set of options. In Rust code they are the typed
//! fields of [`FieldOptions`]; options arriving as loose JSON (from a
//! template engine or the CLI) go through [`FieldOptions::from_json`], which
//! rejects anything outside [`ALLOWED_FIELD_OPTIONS`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{FormError, Result};

pub const ALLOWED_FIELD_OPTIONS: &[&str] = &[
    "accept",
    "add_not_applicable",
    "field",
    "max",
    "min",
    "number_options",
    "options",
    "preview_size",
    "required",
    "rows",
    "step",
    "type",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOptions {
    /// Accepted MIME types for file inputs.
    pub accept: Option<String>,
    /// Adds a "not applicable" choice (radio or checkbox).
    #[serde(default)]
    pub add_not_applicable: bool,
    /// Field name, when the partial is rendered for a different field.
    pub field: Option<String>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    /// Extra attributes forwarded to a number input.
    pub number_options: Option<Map<String, Value>>,
    /// Choices for select partials.
    pub options: Option<Vec<SelectOption>>,
    pub preview_size: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub rows: Option<u32>,
    pub step: Option<f64>,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
}

impl FieldOptions {
    /// Validates and parses loosely-typed options.
    ///
    /// Unknown keys are reported together, in input order.
    pub fn from_json(options: &Map<String, Value>) -> Result<Self> {
        let disallowed: Vec<String> = options
            .keys()
            .filter(|key| !ALLOWED_FIELD_OPTIONS.contains(&key.as_str()))
            .cloned()
            .collect();
        if !disallowed.is_empty() {
            return Err(FormError::DisallowedOptions { keys: disallowed });
        }

        // Parse key by key so a bad value names its option
        for (key, value) in options {
            let mut single = Map::new();
            single.insert(key.clone(), value.clone());
            serde_json::from_value::<FieldOptions>(Value::Object(single)).map_err(|source| {
                FormError::InvalidOptions {
                    field: key.clone(),
                    source,
                }
            })?;
        }

        serde_json::from_value(Value::Object(options.clone())).map_err(|source| {
            FormError::InvalidOptions {
                field: String::new(),
                source,
            }
        })
    }
}

/// One `<option>` of a select: visible label and submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawSelectOption", into = "RawSelectOption")]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// `["Active", "active"]`, `["Size", 3]` or a bare `"red"`.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RawSelectOption {
    Pair(String, Value),
    Single(String),
}

impl From<RawSelectOption> for SelectOption {
    fn from(raw: RawSelectOption) -> Self {
        match raw {
            RawSelectOption::Pair(label, Value::String(value)) => Self { label, value },
            RawSelectOption::Pair(label, value) => Self {
                label,
                value: value.to_string(),
            },
            RawSelectOption::Single(value) => Self {
                label: value.clone(),
                value,
            },
        }
    }
}

impl From<SelectOption> for RawSelectOption {
    fn from(option: SelectOption) -> Self {
        RawSelectOption::Pair(option.label, Value::String(option.value))
    }
}
