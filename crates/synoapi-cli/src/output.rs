//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print a warning.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as JSON, pretty-printed on request.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Print each item of a list as its own JSON line, or a note when empty.
pub fn json_lines<T: Serialize>(items: &[T], pretty: bool, empty: &str) -> Result<()> {
    if items.is_empty() {
        eprintln!("{}", empty.dimmed());
        return Ok(());
    }
    for item in items {
        json(item, pretty)?;
    }
    Ok(())
}
