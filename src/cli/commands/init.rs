use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::core::COMMENT_PLACEHOLDER_KEY;

/// Write the default configuration, and a starter catalog holding the
/// shared keys the partials need when the messages directory is missing.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)?;
    print_created(CONFIG_FILE_NAME);

    let config = Config::default();
    let messages_root = Path::new(&config.messages_root);
    if !messages_root.exists() {
        fs::create_dir_all(messages_root)
            .with_context(|| format!("Failed to create {}", messages_root.display()))?;
        let catalog_path = messages_root.join(format!("{}.json", config.locale));
        fs::write(&catalog_path, starter_catalog_json()?)?;
        print_created(&format!("messages/{}.json", config.locale));
    }

    Ok(ExitStatus::Success)
}

fn print_created(name: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", name).green()
    );
}

/// Shared labels used by pass/fail, number and comment partials.
fn starter_catalog_json() -> Result<String> {
    let comment_placeholder = COMMENT_PLACEHOLDER_KEY
        .strip_prefix("shared.")
        .unwrap_or(COMMENT_PLACEHOLDER_KEY);
    let mut shared = serde_json::Map::new();
    shared.insert("pass".into(), json!("Pass"));
    shared.insert("fail".into(), json!("Fail"));
    shared.insert("not_applicable".into(), json!("Not Applicable"));
    shared.insert("comment".into(), json!("Comment"));
    shared.insert(comment_placeholder.into(), json!("Comment on %{field}"));

    serde_json::to_string_pretty(&json!({ "shared": shared }))
        .context("Failed to generate starter catalog.")
}
