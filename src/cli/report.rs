//! Report formatting and printing utilities.
//!
//! Resolved fields are printed as an aligned key/value block. Separate from
//! core logic to allow formfill to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{FieldSetup, FormError};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Shown in place of an absent hint, placeholder or value.
const ABSENT: &str = "-";

/// Print a resolved field to stdout.
pub fn print_setup(setup: &FieldSetup) {
    print_setup_to(setup, &mut io::stdout().lock());
}

/// Print a resolved field to a custom writer.
pub fn print_setup_to<W: Write>(setup: &FieldSetup, writer: &mut W) {
    let value = setup.value.to_string();
    let rows = [
        ("label", setup.label.as_str()),
        ("hint", setup.hint.as_deref().unwrap_or(ABSENT)),
        ("placeholder", setup.placeholder.as_deref().unwrap_or(ABSENT)),
        ("value", if value.is_empty() { ABSENT } else { value.as_str() }),
        ("prefilled", if setup.prefilled { "yes" } else { "no" }),
    ];

    let _ = writeln!(
        writer,
        "{} {} {}",
        SUCCESS_MARK.green(),
        setup.field.bold(),
        format!("({})", setup.i18n_base).dimmed()
    );
    print_rows(&rows, writer);
}

/// Print a list of field names, one per line.
pub fn print_fields(fields: &[String]) {
    print_fields_to(fields, &mut io::stdout().lock());
}

pub fn print_fields_to<W: Write>(fields: &[String], writer: &mut W) {
    for field in fields {
        let _ = writeln!(writer, "{}", field);
    }
}

/// Print a resolution failure to stderr.
pub fn print_failure(err: &FormError) {
    print_failure_to(err, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(err: &FormError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        err
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_rows<W: Write>(rows: &[(&str, &str)], writer: &mut W) {
    let key_width = rows
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(*key))
        .max()
        .unwrap_or(0);

    for (key, value) in rows {
        let padding = key_width - UnicodeWidthStr::width(*key);
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            key.cyan(),
            " ".repeat(padding),
            value
        );
    }
}
