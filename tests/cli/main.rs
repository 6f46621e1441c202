use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod fields;
mod init;
mod render;
mod resolve;

const BIN_NAME: &str = "formfill";

pub const MESSAGES: &str = r#"{
  "forms": {
    "inspection": {
      "fields": {
        "height": "Height",
        "passed": "Passed",
        "ropes": "Ropes",
        "notes": "Notes",
        "status": "Status"
      },
      "submit": "Save Inspection"
    },
    "hints": { "height": "In metres" },
    "placeholders": { "height": "0.0" }
  },
  "shared": {
    "pass": "Pass",
    "fail": "Fail",
    "not_applicable": "Not Applicable",
    "comment": "Comment",
    "field_comment_placeholder": "Comment on %{field}"
  }
}"#;

pub const CONFIG: &str = r#"{
  "i18nBase": "forms.inspection",
  "excludedPrefillFields": ["passed"]
}"#;

pub const RECORD: &str = r#"{
  "type": "Inspection",
  "id": 7,
  "attributes": {
    "height": null,
    "passed": null,
    "notes": "Frayed at the top",
    "ropes_pass": null,
    "ropes_comment": null,
    "status": "open"
  }
}"#;

pub const PREVIOUS: &str = r#"{
  "type": "Inspection",
  "id": 6,
  "attributes": {
    "height": 2.50,
    "passed": true,
    "notes": "Last year's note",
    "ropes_pass": true,
    "ropes_comment": "Replaced"
  }
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the temp project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a config, an English catalog and two inspection records.
    pub fn with_inspection() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".formfillrc.json", CONFIG)?;
        test.write_file("messages/en.json", MESSAGES)?;
        test.write_file("record.json", RECORD)?;
        test.write_file("previous.json", PREVIOUS)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn resolve_command(&self, field: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(["resolve", field]);
        cmd
    }

    pub fn render_command(&self, partial: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(["render", partial]);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
