//! Loading `KEY=VALUE` secret text into an environment.
//!
//! Format, one entry per line:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/app
//! EMPTY=
//! QUERY=[a=b]
//! ```
//!
//! Blank lines are skipped. A value may contain `=` only when the whole value
//! is wrapped in one pair of square brackets; the brackets are stripped. There
//! is no other quoting or escaping.

use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::info;

use crate::error::{Error, ParseError, ParseReason, Result};

/// Destination for parsed entries.
pub trait EnvSink {
    /// Write one variable. Returns a description of the failure if the sink
    /// refuses it.
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String>;
}

/// The real process environment.
///
/// Rejects what the platform cannot store (NUL bytes, `=` in keys) instead of
/// panicking. Not safe to use while other threads read or write the
/// environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if key.is_empty() {
            return Err("variable name is empty".to_string());
        }
        if key.contains('=') {
            return Err(format!("variable name {:?} contains '='", key));
        }
        if key.contains('\0') {
            return Err(format!("variable name {:?} contains a NUL byte", key));
        }
        if value.contains('\0') {
            return Err(format!("value of {} contains a NUL byte", key));
        }

        std::env::set_var(key, value);
        Ok(())
    }
}

/// In-memory sink, ordered by key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSink for MemoryEnv {
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Parse a single trimmed, non-empty line.
///
/// # Errors
///
/// Returns `ParseError` if the line has no `=`, an empty key, or a value
/// containing `=` that is not bracket-wrapped.
pub fn parse_line(line: &str, line_number: usize) -> std::result::Result<Entry, ParseError> {
    let fail = |reason| ParseError {
        line: line.to_string(),
        line_number,
        reason,
    };

    let (raw_key, raw_value) = line
        .split_once('=')
        .ok_or_else(|| fail(ParseReason::MissingDelimiter))?;

    let key = raw_key.trim();
    let mut value = raw_value.trim();

    if key.is_empty() {
        return Err(fail(ParseReason::EmptyKey));
    }

    if value.contains('=') {
        value = unwrap_brackets(value).ok_or_else(|| fail(ParseReason::InvalidEscape))?;
    }

    Ok(Entry {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// `[inner]` -> `inner`, for values longer than the brackets alone.
fn unwrap_brackets(value: &str) -> Option<&str> {
    if value.len() > 2 && value.starts_with('[') && value.ends_with(']') {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}

/// Parse one line and write it into `sink`.
///
/// Logs the key on success; the value is never logged.
pub fn apply_line(
    line: &str,
    line_number: usize,
    sink: &mut dyn EnvSink,
) -> std::result::Result<(), ParseError> {
    let entry = parse_line(line, line_number)?;

    sink.set(&entry.key, &entry.value).map_err(|msg| ParseError {
        line: line.to_string(),
        line_number,
        reason: ParseReason::Rejected(msg),
    })?;

    info!(key = %entry.key, "set environment variable");
    Ok(())
}

/// Apply every line of `reader` to `sink`, stopping at the first failure.
///
/// Lines are numbered from 1 and trimmed; blank lines are skipped. Entries
/// written before a failure are not rolled back.
///
/// The payload must be UTF-8. A line with invalid bytes fails the whole load
/// with `Error::Read` rather than being passed through to the sink.
///
/// # Returns
///
/// Number of entries written.
///
/// # Errors
///
/// `Error::SetEnv` for a malformed or rejected line, `Error::Read` if the
/// reader itself fails (including invalid UTF-8).
pub fn load_from_reader<R: BufRead>(reader: R, sink: &mut dyn EnvSink) -> Result<usize> {
    let mut count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = zeroize::Zeroizing::new(line.map_err(Error::Read)?);
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        apply_line(trimmed, idx + 1, sink)?;
        count += 1;
    }

    Ok(count)
}
