//! Field resolution engine.
//!
//! - `field`: suffix conventions and composite field names
//! - `value`: attribute values and numeric display formatting
//! - `model`: the model accessor capability and a JSON-backed record
//! - `translate`: translation catalog and label/hint/placeholder lookup
//! - `resolve`: current value with prefill from a previous record
//! - `options`: the allow-listed per-field render options
//! - `context`: explicit per-form context and field setup

pub mod context;
pub mod error;
pub mod field;
pub mod model;
pub mod options;
pub mod resolve;
pub mod translate;
pub mod value;

pub use context::{
    COMMENT_PLACEHOLDER_KEY, CommentOptions, FieldSetup, FormContext, radio_button_options,
};
pub use error::{FormError, Result};
pub use field::{
    base_field_name, composite_fields, form_field_label, form_name_from_assessment,
    is_comment_field, is_composite_field, is_pass_field, strip_field_suffix,
};
pub use model::{Model, Record};
pub use options::{ALLOWED_FIELD_OPTIONS, FieldOptions, SelectOption};
pub use resolve::{ExclusionSet, FieldResolver, Resolution, field_value_from_model};
pub use translate::{FieldLabels, MessageCatalog, Translator, build_label_set};
pub use value::{FieldValue, format_numeric_value, strip_trailing_zeros};
