//! Translation catalog lookups.
//!
//! Labels, hints and placeholders come from a locale catalog addressed by
//! dotted keys (`forms.inspection.fields.height`). [`MessageCatalog`] is the
//! JSON-backed implementation: nested objects are flattened into dotted keys.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use serde_json::Value;
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::core::error::{FormError, Result};
use crate::core::field::{is_pass_field, strip_field_suffix};

/// Resolves dotted keys to localized strings.
pub trait Translator {
    /// Raw lookup. `None` when the key is absent.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Required lookup: a missing key is a [`FormError::MissingTranslation`].
    fn translate(&self, key: &str) -> Result<String> {
        self.lookup(key).ok_or_else(|| FormError::MissingTranslation {
            key: key.to_string(),
        })
    }

    /// Optional lookup, defaulting to `None`.
    fn translate_or_none(&self, key: &str) -> Option<String> {
        self.lookup(key)
    }

    /// Required lookup with `%{name}` placeholders replaced from `args`.
    fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> Result<String> {
        let template = self.translate(key)?;
        Ok(interpolate(&template, args))
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("%{{{}}}", name), value)
    })
}

/// Label, hint and placeholder for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabels {
    pub label: String,
    pub hint: Option<String>,
    pub placeholder: Option<String>,
}

/// Resolves the label set for `field` under `i18n_base`.
///
/// The label key `{i18n_base}.fields.{field}` is required; pass fields are
/// looked up under their base name, comment fields keep their own entry.
/// Hints and placeholders live next to the form namespace: for an
/// `i18n_base` of `forms.slide` they are `forms.hints.{field}` and
/// `forms.placeholders.{field}`, and default to `None`.
pub fn build_label_set(
    translator: &dyn Translator,
    field: &str,
    i18n_base: &str,
) -> Result<FieldLabels> {
    let lookup_field = if is_pass_field(field) {
        strip_field_suffix(field)
    } else {
        field
    };
    let label = translator.translate(&format!("{}.fields.{}", i18n_base, lookup_field))?;

    let root = match i18n_base.rsplit_once('.') {
        Some((root, _)) => format!("{}.", root),
        None => String::new(),
    };
    let hint = translator.translate_or_none(&format!("{}hints.{}", root, field));
    let placeholder = translator.translate_or_none(&format!("{}placeholders.{}", root, field));

    Ok(FieldLabels {
        label,
        hint,
        placeholder,
    })
}

/// Flattened locale catalog.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a JSON document.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let json: Value = serde_json::from_str(content).context("Failed to parse catalog JSON")?;
        let mut catalog = Self::new();
        catalog.merge_value(&json);
        Ok(catalog)
    }

    /// Loads every catalog file for `locale` below `messages_root`.
    ///
    /// Reads `{messages_root}/{locale}.json` and any `*.{locale}.json` in
    /// subdirectories. Files are merged in path order, later keys win.
    /// Files that fail to parse are skipped with a warning.
    pub fn load(messages_root: &Path, locale: &str) -> anyhow::Result<Self> {
        if !messages_root.exists() {
            bail!(
                "Messages directory '{}' does not exist.\n\
                 Hint: Check your .formfillrc.json 'messagesRoot' setting.",
                messages_root.display()
            );
        }

        if !messages_root.is_dir() {
            bail!("'{}' is not a directory.", messages_root.display());
        }

        let mut catalog = Self::new();
        for path in locale_files(messages_root, locale) {
            match parse_json_file(&path) {
                Ok(json) => catalog.merge_value(&json),
                Err(e) => warn!("skipping {}: {:#}", path.display(), e),
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn merge_value(&mut self, value: &Value) {
        flatten_json(value, String::new(), &mut self.messages);
    }
}

impl Translator for MessageCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        let found = self.messages.get(key).cloned();
        trace!(key, found = found.is_some(), "catalog lookup");
        found
    }
}

fn locale_files(messages_root: &Path, locale: &str) -> Vec<PathBuf> {
    let exact = format!("{}.json", locale);
    let nested = format!(".{}.json", locale);

    let mut files: Vec<PathBuf> = WalkDir::new(messages_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            let at_root = entry.depth() == 1;
            (at_root && name == exact) || name.ends_with(&nested)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn parse_json_file(path: &Path) -> anyhow::Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

fn flatten_json(value: &Value, prefix: String, result: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            result.insert(prefix, n.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn catalog() -> MessageCatalog {
        MessageCatalog::from_json(
            r#"{
                "forms": {
                    "slide": {
                        "fields": {
                            "height": "Platform Height",
                            "ropes": "Ropes",
                            "ropes_comment": "Ropes Notes"
                        }
                    },
                    "hints": { "height": "Measured in metres" },
                    "placeholders": { "height": "0.0" }
                },
                "shared": { "field_comment_placeholder": "Add a comment about %{field}" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_flattens_nested_keys() {
        let catalog = catalog();
        assert_eq!(
            catalog.lookup("forms.slide.fields.height").as_deref(),
            Some("Platform Height")
        );
        assert_eq!(catalog.lookup("forms.slide.fields"), None);
    }

    #[test]
    fn test_translate_missing_key_is_error() {
        let err = catalog().translate("forms.slide.fields.width").unwrap_err();
        assert_eq!(err.to_string(), "translation missing: forms.slide.fields.width");
    }

    #[test]
    fn test_translate_with_interpolation() {
        let text = catalog()
            .translate_with("shared.field_comment_placeholder", &[("field", "Ropes")])
            .unwrap();
        assert_eq!(text, "Add a comment about Ropes");
    }

    #[test]
    fn test_build_label_set_with_hint_and_placeholder() {
        let labels = build_label_set(&catalog(), "height", "forms.slide").unwrap();
        assert_eq!(
            labels,
            FieldLabels {
                label: "Platform Height".to_string(),
                hint: Some("Measured in metres".to_string()),
                placeholder: Some("0.0".to_string()),
            }
        );
    }

    #[test]
    fn test_build_label_set_pass_field_uses_base_label() {
        let labels = build_label_set(&catalog(), "ropes_pass", "forms.slide").unwrap();
        assert_eq!(labels.label, "Ropes");
        assert_eq!(labels.hint, None);
        assert_eq!(labels.placeholder, None);
    }

    #[test]
    fn test_build_label_set_comment_field_keeps_full_name() {
        let labels = build_label_set(&catalog(), "ropes_comment", "forms.slide").unwrap();
        assert_eq!(labels.label, "Ropes Notes");
    }

    #[test]
    fn test_build_label_set_missing_label_fails() {
        let result = build_label_set(&catalog(), "width", "forms.slide");
        assert!(matches!(
            result,
            Err(FormError::MissingTranslation { key }) if key == "forms.slide.fields.width"
        ));
    }

    #[test]
    fn test_load_merges_locale_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("en.json"),
            r#"{"shared": {"pass": "Pass", "fail": "Fail"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("de.json"), r#"{"shared": {"pass": "Bestanden"}}"#).unwrap();
        fs::create_dir_all(dir.path().join("forms")).unwrap();
        fs::write(
            dir.path().join("forms").join("slide.en.json"),
            r#"{"shared": {"fail": "Failed"}, "forms": {"slide": {"submit": "Save"}}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("forms").join("broken.en.json"), "{").unwrap();

        let catalog = MessageCatalog::load(dir.path(), "en").unwrap();
        assert_eq!(catalog.lookup("shared.pass").as_deref(), Some("Pass"));
        assert_eq!(catalog.lookup("shared.fail").as_deref(), Some("Failed"));
        assert_eq!(catalog.lookup("forms.slide.submit").as_deref(), Some("Save"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempdir().unwrap();
        let result = MessageCatalog::load(&dir.path().join("nope"), "en");
        assert!(result.is_err());
    }
}
