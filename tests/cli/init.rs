use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["locale"], "en");
    assert!(
        parsed.get("excludedPrefillFields").is_some(),
        "Config should have 'excludedPrefillFields' field"
    );
    assert!(
        parsed.get("i18nBase").is_none(),
        "An unset i18n base should not be written"
    );

    // 2-space indentation
    assert!(content.contains("\n  \"locale\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".formfillrc.json").exists());
    let content = test.read_file(".formfillrc.json")?;
    assert_config_content(&content)?;

    let catalog: Value = serde_json::from_str(&test.read_file("messages/en.json")?)?;
    assert_eq!(catalog["shared"]["pass"], "Pass");
    assert_eq!(
        catalog["shared"]["field_comment_placeholder"],
        "Comment on %{field}"
    );

    Ok(())
}

#[test]
fn test_init_keeps_existing_messages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file("messages/en.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_starter_catalog_renders_pass_fail() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file(
        "messages/inspection.en.json",
        r#"{ "forms": { "inspection": { "fields": { "ropes": "Ropes" } } } }"#,
    )?;
    test.write_file(
        "record.json",
        r#"{ "type": "Inspection", "id": 1, "attributes": { "ropes_pass": false } }"#,
    )?;

    assert_cmd_snapshot!(test.render_command("pass_fail").args([
        "ropes_pass",
        "--record",
        "record.json",
        "--i18n-base",
        "forms.inspection",
    ]));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".formfillrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".formfillrc.json")?, "{}");

    Ok(())
}
