use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::ExclusionSet;

pub const CONFIG_FILE_NAME: &str = ".formfillrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Default i18n namespace of the form, e.g. `forms.inspection`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_base: Option<String>,
    /// Fields never prefilled from a previous record.
    #[serde(default)]
    pub excluded_prefill_fields: Vec<String>,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            locale: default_locale(),
            i18n_base: None,
            excluded_prefill_fields: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an empty locale, a malformed i18n base, or a
    /// malformed excluded field name.
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            bail!("'locale' must not be empty");
        }

        if let Some(base) = &self.i18n_base
            && !is_dotted_key(base)
        {
            bail!("Invalid i18n base in 'i18nBase': \"{}\"", base);
        }

        for field in &self.excluded_prefill_fields {
            if field.is_empty() || field.contains(char::is_whitespace) {
                bail!(
                    "Invalid field name in 'excludedPrefillFields': \"{}\"",
                    field
                );
            }
        }

        Ok(())
    }

    pub fn exclusion_set(&self) -> ExclusionSet {
        self.excluded_prefill_fields.iter().cloned().collect()
    }
}

fn is_dotted_key(key: &str) -> bool {
    !key.contains(char::is_whitespace) && key.split('.').all(|segment| !segment.is_empty())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory containing the config file, or the start directory when
    /// defaults are used. Relative paths in the config resolve against it.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn messages_root(&self) -> PathBuf {
        self.root.join(&self.config.messages_root)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
