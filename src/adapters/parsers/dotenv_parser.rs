use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::errors::{KamalEasyError, Result};
use crate::core::models::env_file::{EnvEntry, EnvFile};

/// Parses environment variable files (`.env.uat`, `.env.production`, ...).
///
/// Supports:
/// - `KEY=value` entries, values may contain `=`
/// - An optional `export ` prefix
/// - Comment lines (`# ...`), blank lines, and inline ` # comments` after
///   unquoted values
/// - Single-quoted values, taken literally
/// - Double-quoted values, with `\n`, `\"` and `\\` unescaped
/// - `${NAME}` / `$NAME` expansion in unquoted and double-quoted values,
///   from keys defined earlier in the file, then the process environment
pub struct DotenvParser;

impl DotenvParser {
    /// Read and parse the file at `path`.
    pub fn parse_file(&self, path: &Path) -> Result<EnvFile> {
        let content = std::fs::read_to_string(path)?;
        self.parse(&content, path)
    }

    /// Parse raw content. `source` is only used for error messages.
    pub fn parse(&self, content: &str, source: &Path) -> Result<EnvFile> {
        let mut entries = Vec::new();
        let mut known: HashMap<String, String> = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            if let Some(entry) = Self::parse_line(raw, idx + 1, source, &known)? {
                known.insert(entry.key.clone(), entry.value.clone());
                entries.push(entry);
            }
        }

        Ok(EnvFile { entries })
    }

    /// Parse a single line. Blank and comment lines yield `None`.
    fn parse_line(
        raw: &str,
        line_number: usize,
        source: &Path,
        known: &HashMap<String, String>,
    ) -> Result<Option<EnvEntry>> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let trimmed = trimmed
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(trimmed);

        let Some(eq_pos) = trimmed.find('=') else {
            return Err(parse_error(
                source,
                format!("line {line_number}: expected KEY=value, got: {trimmed}"),
            ));
        };

        let key = trimmed[..eq_pos].trim().to_string();
        if key.is_empty() {
            return Err(parse_error(source, format!("line {line_number}: empty key")));
        }

        let raw_value = trimmed[eq_pos + 1..].trim_start();
        let value = match raw_value.chars().next() {
            Some('\'') => match raw_value[1..].find('\'') {
                Some(end) => raw_value[1..=end].to_string(),
                None => raw_value.to_string(),
            },
            Some('"') => expand(&unescape_double_quoted(&raw_value[1..]), known),
            _ => expand(strip_inline_comment(raw_value), known),
        };

        Ok(Some(EnvEntry { key, value }))
    }
}

fn parse_error(source: &Path, detail: String) -> KamalEasyError {
    KamalEasyError::EnvFileParse {
        file: PathBuf::from(source),
        detail,
    }
}

/// Cut an unquoted value at the first `#` that follows whitespace.
fn strip_inline_comment(value: &str) -> &str {
    let mut prev_is_space = false;
    for (idx, ch) in value.char_indices() {
        if ch == '#' && prev_is_space {
            return value[..idx].trim_end();
        }
        prev_is_space = ch.is_whitespace();
    }
    value.trim_end()
}

/// Read a double-quoted value up to its closing quote. `body` starts just
/// after the opening quote; anything after the closing quote is ignored.
fn unescape_double_quoted(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => break,
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            _ => out.push(ch),
        }
    }
    out
}

/// Expand `${NAME}` and `$NAME` from `known`, then the process environment.
/// Undefined names expand to an empty string.
fn expand(value: &str, known: &HashMap<String, String>) -> String {
    let lookup = |name: &str| {
        known
            .get(name)
            .cloned()
            .or_else(|| std::env::var(name).ok())
            .unwrap_or_default()
    };
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || c == '_';

    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(close) = braced.find('}') {
                out.push_str(&lookup(&braced[..close]));
                rest = &braced[close + 1..];
                continue;
            }
        } else {
            let len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
            if len > 0 {
                out.push_str(&lookup(&after[..len]));
                rest = &after[len..];
                continue;
            }
        }

        out.push('$');
        rest = after;
    }
    out.push_str(rest);
    out
}
