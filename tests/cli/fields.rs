use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_pass_fail_comment_fields() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["fields", "ropes", "pass_fail_comment"]));

    Ok(())
}

#[test]
fn test_pass_field_comment_uses_base_name() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["fields", "ropes_pass", "pass_fail_comment"]));

    Ok(())
}

#[test]
fn test_plain_partial_has_no_siblings() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["fields", "height", "number"]));

    Ok(())
}
