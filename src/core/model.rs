//! Model accessor capability.
//!
//! The resolver never reflects on concrete types. Anything that can answer
//! "do you have this attribute" and "what is its value" can back a form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::value::FieldValue;

/// Read access to a record's attributes.
pub trait Model {
    /// Type name, possibly namespaced (`Assessments::SlideAssessment`).
    fn type_name(&self) -> &str;

    fn has_field(&self, name: &str) -> bool;

    /// Attribute value, `Null` when the attribute is unset or missing.
    fn field(&self, name: &str) -> FieldValue;

    /// Attribute names, used for diagnostics.
    fn attribute_names(&self) -> Vec<String>;

    /// Identity used to scope generated element ids.
    fn record_id(&self) -> String;

    /// Named child record, e.g. an inspection's `slide_assessment`.
    fn sub_record(&self, _name: &str) -> Option<&dyn Model> {
        None
    }

    /// Form parameter prefix: `Assessments::SlideAssessment` -> `slide_assessment`.
    fn param_key(&self) -> String {
        underscore(demodulize(self.type_name()))
    }

    /// Whether this record is a per-area assessment hanging off a parent.
    fn is_assessment(&self) -> bool {
        self.type_name().contains("Assessment")
    }
}

/// Last segment of a `::`-separated type path.
pub fn demodulize(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// `SlideAssessment` -> `slide_assessment`, `HTTPStatus` -> `http_status`.
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '-' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

/// A JSON-backed record.
///
/// ```json
/// {
///   "type": "Inspection",
///   "id": 42,
///   "attributes": { "passed": true },
///   "records": { "slide_assessment": { "type": "SlideAssessment", "attributes": {} } }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub records: BTreeMap<String, Record>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_record(mut self, name: impl Into<String>, record: Record) -> Self {
        self.records.insert(name.into(), record);
        self
    }
}

impl Model for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn has_field(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    fn field(&self, name: &str) -> FieldValue {
        self.attributes
            .get(name)
            .map(FieldValue::from)
            .unwrap_or_default()
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    fn record_id(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "new".to_string(),
            Some(other) => other.to_string(),
        }
    }

    fn sub_record(&self, name: &str) -> Option<&dyn Model> {
        self.records.get(name).map(|r| r as &dyn Model)
    }
}
