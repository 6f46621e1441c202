use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_resolve_prefills_empty_field_from_previous() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("height")
        .args(["--record", "record.json", "--previous", "previous.json"]));

    Ok(())
}

#[test]
fn test_resolve_keeps_current_value() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("notes")
        .args(["--record", "record.json", "--previous", "previous.json", "--json"]));

    Ok(())
}

#[test]
fn test_config_exclusions_block_prefill() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("passed")
        .args(["--record", "record.json", "--previous", "previous.json"]));

    Ok(())
}

#[test]
fn test_exclude_flag_adds_to_config_exclusions() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.resolve_command("height").args([
        "--record",
        "record.json",
        "--previous",
        "previous.json",
        "--exclude",
        "height",
    ]));

    Ok(())
}

#[test]
fn test_no_previous_record_means_no_prefill() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("height")
        .args(["--record", "record.json"]));

    Ok(())
}

#[test]
fn test_unknown_field_fails_with_available_attributes() -> Result<()> {
    let test = CliTest::with_inspection()?;
    // Labelled but not an attribute of the record
    test.write_file(
        "messages/colour.en.json",
        r#"{ "forms": { "inspection": { "fields": { "colour": "Colour" } } } }"#,
    )?;

    assert_cmd_snapshot!(test
        .resolve_command("colour")
        .args(["--record", "record.json"]));

    Ok(())
}

#[test]
fn test_missing_label_is_an_error() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("ropes_comment")
        .args(["--record", "record.json"]));

    Ok(())
}

#[test]
fn test_pass_field_uses_base_label() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("ropes_pass")
        .args(["--record", "record.json", "--previous", "previous.json"]));

    Ok(())
}

#[test]
fn test_disallowed_options_fail() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.resolve_command("height").args([
        "--record",
        "record.json",
        "--options",
        r#"{"required": true, "colour": "red"}"#,
    ]));

    Ok(())
}

#[test]
fn test_locale_override() -> Result<()> {
    let test = CliTest::with_inspection()?;
    test.write_file(
        "messages/de.json",
        r#"{ "forms": { "inspection": { "fields": { "height": "Höhe" } } } }"#,
    )?;

    assert_cmd_snapshot!(test
        .resolve_command("height")
        .args(["--record", "record.json", "--locale", "de"]));

    Ok(())
}

#[test]
fn test_missing_record_requires_form_object() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.resolve_command("height"));

    Ok(())
}

#[test]
fn test_unreadable_record_file_is_an_error() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .resolve_command("height")
        .args(["--record", "nope.json"]));

    Ok(())
}

#[test]
fn test_missing_messages_root_flag_is_an_error() -> Result<()> {
    let test = CliTest::with_inspection()?;

    insta::with_settings!({filters => vec![(r"'[^']*/locales'", "'[ROOT]/locales'")]}, {
        assert_cmd_snapshot!(test
            .resolve_command("height")
            .args(["--record", "record.json", "--messages-root", "locales"]));
    });

    Ok(())
}
