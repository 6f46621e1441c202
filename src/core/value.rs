//! Attribute values read off a model, and their display formatting.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Strings that look like a decimal number: `-12`, `.5`, `3.25`.
static NUMERIC_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A-?\d*\.?\d+\z").unwrap());

/// A trailing run of zeros directly after the decimal point.
static TRAILING_ZEROS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.0+\z").unwrap());

/// Fractional digits kept when a prefilled number is displayed.
pub const NUMERIC_PRECISION: usize = 4;

/// Value of a single model attribute.
///
/// `Null` stands for both "attribute is unset" and "attribute holds null";
/// the model accessor decides whether an attribute exists at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Non-null, not `false`, and not a blank string.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Null | FieldValue::Bool(false) => false,
            FieldValue::Text(s) => !s.trim().is_empty(),
            _ => true,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            // Whole floats keep one decimal place: 25.0 rather than 25
            FieldValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Text(other.to_string()),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        FieldValue::from(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Formats a value for display as a prefilled number.
///
/// Numeric strings are coerced to numbers first. Numbers are rendered with
/// [`NUMERIC_PRECISION`] fractional digits, rounding half away from zero on
/// the decimal digits, and insignificant zeros removed. Integers are
/// already exact and are printed as they are. Everything else passes
/// through unchanged.
///
/// ```
/// use formfill::core::{FieldValue, format_numeric_value};
///
/// assert_eq!(format_numeric_value(FieldValue::Float(25.0)), FieldValue::from("25"));
/// assert_eq!(format_numeric_value(FieldValue::from("25.1234567")), FieldValue::from("25.1235"));
/// assert_eq!(format_numeric_value(FieldValue::Bool(true)), FieldValue::Bool(true));
/// ```
pub fn format_numeric_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) if NUMERIC_STRING_REGEX.is_match(&s) => match s.parse::<f64>() {
            Ok(parsed) => FieldValue::Text(number_with_precision(parsed, NUMERIC_PRECISION)),
            Err(_) => FieldValue::Text(s),
        },
        FieldValue::Int(i) => FieldValue::Text(i.to_string()),
        FieldValue::Float(f) => FieldValue::Text(number_with_precision(f, NUMERIC_PRECISION)),
        other => other,
    }
}

/// Rounds the shortest decimal form of `number` to `precision` fractional
/// digits, half away from zero, with insignificant trailing zeros removed.
fn number_with_precision(number: f64, precision: usize) -> String {
    if !number.is_finite() {
        return number.to_string();
    }

    // f64 Display never uses exponent notation
    let decimal = number.to_string();
    let (negative, magnitude) = match decimal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, decimal.as_str()),
    };
    let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().take(precision));
    digits.resize(int_part.len() + precision, b'0');

    if frac_part.as_bytes().get(precision).is_some_and(|d| *d >= b'5') {
        carry_one(&mut digits);
    }

    let split = digits.len() - precision;
    let int_digits: String = digits[..split].iter().map(|&d| char::from(d)).collect();
    let frac_digits: String = digits[split..].iter().map(|&d| char::from(d)).collect();
    let frac_digits = frac_digits.trim_end_matches('0');

    let is_zero = digits.iter().all(|&d| d == b'0');
    let sign = if negative && !is_zero { "-" } else { "" };
    if frac_digits.is_empty() {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

/// Adds one unit in the last place of a run of ASCII digits.
fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Removes a fractional part made only of zeros (`25.000` -> `25`).
///
/// Returns `None` for a null value. `25.50` is left alone because its
/// fractional part is not all zeros.
pub fn strip_trailing_zeros(value: &FieldValue) -> Option<String> {
    if value.is_null() {
        return None;
    }
    Some(
        TRAILING_ZEROS_REGEX
            .replace(&value.to_string(), "")
            .into_owned(),
    )
}
