//! Errors raised while resolving or rendering a form field.
//!
//! Every variant is a misconfiguration that must be fixed at the source
//! (a missing locale entry, a misspelled attribute, a bad option). Absent
//! optional data (hints, placeholders, previous values) never produces an
//! error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// A required translation key is absent from the catalog.
    #[error("translation missing: {key}")]
    MissingTranslation { key: String },

    /// Neither the bare nor the `_pass` attribute exists on the model.
    #[error(
        "Field '{field}' or '{suffixed}' not found on {model}. Available fields: {}",
        .available.join(", ")
    )]
    FieldNotFound {
        field: String,
        suffixed: String,
        model: String,
        available: Vec<String>,
    },

    /// Per-field options contained keys outside the allow-list.
    #[error("field options contain disallowed keys: {}", format_keys(.keys))]
    DisallowedOptions { keys: Vec<String> },

    /// An allowed option carried a value of the wrong shape.
    #[error("invalid value for option '{field}': {source}")]
    InvalidOptions {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value the form context must provide is absent.
    #[error("missing {0}")]
    MissingContext(&'static str),

    #[error("unknown partial '{0}'")]
    UnknownPartial(String),
}

fn format_keys(keys: &[String]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!(":{}", k)).collect();
    format!("[{}]", quoted.join(", "))
}
