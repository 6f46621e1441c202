use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_render_submit_button() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .render_command("submit_button")
        .args(["--record", "record.json"]));

    Ok(())
}

#[test]
fn test_render_prefilled_number() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.render_command("number").args([
        "height",
        "--record",
        "record.json",
        "--previous",
        "previous.json",
        "--options",
        r#"{"min": 0, "max": 10}"#,
    ]));

    Ok(())
}

#[test]
fn test_render_pass_fail_comment_prefilled() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.render_command("pass_fail_comment").args([
        "ropes",
        "--record",
        "record.json",
        "--previous",
        "previous.json",
    ]));

    Ok(())
}

#[test]
fn test_render_search_field() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .render_command("search_field")
        .args(["--url", "/units", "--query", "castle"]));

    Ok(())
}

#[test]
fn test_render_search_field_requires_url() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.render_command("search_field"));

    Ok(())
}

#[test]
fn test_render_select_with_prompt() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test.render_command("select").args([
        "status",
        "--record",
        "record.json",
        "--prompt",
        "Choose...",
        "--options",
        r#"{"options": [["Open", "open"], ["Closed", "closed"]]}"#,
    ]));

    Ok(())
}

#[test]
fn test_render_requires_field() -> Result<()> {
    let test = CliTest::with_inspection()?;

    assert_cmd_snapshot!(test
        .render_command("text_field")
        .args(["--record", "record.json"]));

    Ok(())
}
