//! Shared loading for commands that resolve fields.
//!
//! Loads the config, the message catalog and the record files once, then
//! hands out a [`FormContext`] borrowing from them.

use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::cli::args::{CommonArgs, FormArgs};
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::{ExclusionSet, FormContext, MessageCatalog, Model, Record};

pub struct FormSession {
    pub catalog: MessageCatalog,
    pub record: Option<Record>,
    pub previous: Option<Record>,
    pub excluded: ExclusionSet,
    pub i18n_base: Option<String>,
    pub options: Map<String, Value>,
}

impl FormSession {
    pub fn load(form: &FormArgs, common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir()?;
        let loaded = load_config(&cwd)?;
        if !loaded.from_file {
            debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let locale = common
            .locale
            .clone()
            .unwrap_or_else(|| loaded.config.locale.clone());
        let catalog = match &common.messages_root {
            Some(root) => MessageCatalog::load(&cwd.join(root), &locale)?,
            None => {
                let root = loaded.messages_root();
                if root.is_dir() {
                    MessageCatalog::load(&root, &locale)?
                } else {
                    warn!(root = %root.display(), "messages directory not found, translations unavailable");
                    MessageCatalog::new()
                }
            }
        };
        debug!(locale = %locale, entries = catalog.len(), "loaded message catalog");

        let mut excluded = loaded.config.exclusion_set();
        for field in &form.exclude {
            excluded.insert(field.as_str());
        }

        Ok(Self {
            catalog,
            record: form.record.as_deref().map(read_record).transpose()?,
            previous: form.previous.as_deref().map(read_record).transpose()?,
            excluded,
            i18n_base: form.i18n_base.clone().or(loaded.config.i18n_base),
            options: parse_options(form.options.as_deref())?,
        })
    }

    pub fn context(&self) -> FormContext<'_> {
        let mut ctx = FormContext::new(&self.catalog)
            .with_previous(self.previous.as_ref().map(|r| r as &dyn Model))
            .with_excluded(&self.excluded);
        if let Some(record) = &self.record {
            ctx = ctx.with_form(record);
        }
        if let Some(base) = &self.i18n_base {
            ctx = ctx.with_i18n_base(base);
        }
        ctx
    }
}

fn read_record(path: &Path) -> Result<Record> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    let record: Record = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record file: {}", path.display()))?;
    debug!(path = %path.display(), record_type = %record.type_name, "loaded record");
    Ok(record)
}

fn parse_options(raw: Option<&str>) -> Result<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };
    match serde_json::from_str(raw).context("Failed to parse --options as JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("--options must be a JSON object, got: {}", other),
    }
}
