//! Output formatting for search results.
//!
//! Provides functions to format a [`FinderResult`] as plain lines or JSON.

use crate::{FinderError, FinderResult, HeaderDirectory};
use std::io::{self, Write};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One relative path per line.
    #[default]
    Lines,
    Json,
}

/// Formats one directory as a single output line, without the newline.
pub fn format_line(dir: &HeaderDirectory) -> String {
    dir.relative.display().to_string()
}

/// Formats the result into a string.
pub fn format_result(
    result: &FinderResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, FinderError> {
    match format {
        OutputFormat::Lines => Ok(format_lines(result)),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes one line for `dir` to `out`.
pub fn write_line(out: &mut impl Write, dir: &HeaderDirectory) -> io::Result<()> {
    writeln!(out, "{}", format_line(dir))
}

fn format_lines(result: &FinderResult) -> String {
    let mut out = String::with_capacity(result.directories.len() * 32);
    for dir in &result.directories {
        out.push_str(&format_line(dir));
        out.push('\n');
    }
    out
}

fn format_json(result: &FinderResult, pretty: bool) -> Result<String, FinderError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    json.map_err(|e| FinderError::Serialize(e.to_string()))
}
