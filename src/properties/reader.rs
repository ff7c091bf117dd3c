//! Properties document parsing
//!
//! Documents are split into logical lines (comments and blank lines dropped,
//! backslash continuations joined), then each logical line is split into a
//! key and a value and both are unescaped.

use std::io::Read;
use std::str::Chars;

use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::{debug, trace};

use super::store::PropertyStore;
use crate::errors::{PropsError, Result};

/// A joined logical line, still escaped
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogicalLine {
    text: String,
    /// 1-based line where the logical line starts
    line: usize,
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0c'
}

/// Splits a document into logical lines
struct LineReader<'a> {
    chars: Chars<'a>,
    line: usize,
    /// A `\r` ended the previous natural line; swallow a following `\n`
    skip_lf: bool,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            line: 1,
            skip_lf: false,
        }
    }
}

impl Iterator for LineReader<'_> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<LogicalLine> {
        let mut buf = String::new();
        let mut skip_whitespace = true;
        let mut is_comment = false;
        let mut new_line = true;
        let mut continued = false;
        let mut preceding_backslash = false;
        let mut start_line = self.line;

        loop {
            let Some(c) = self.chars.next() else {
                if is_comment || buf.is_empty() {
                    return None;
                }
                if preceding_backslash {
                    buf.pop();
                }
                return Some(LogicalLine { text: buf, line: start_line });
            };

            if self.skip_lf {
                self.skip_lf = false;
                if c == '\n' {
                    continue;
                }
            }

            if skip_whitespace {
                if is_whitespace(c) {
                    continue;
                }
                if !continued && (c == '\r' || c == '\n') {
                    self.line += 1;
                    self.skip_lf = c == '\r';
                    continue;
                }
                skip_whitespace = false;
                continued = false;
            }

            if new_line {
                new_line = false;
                start_line = self.line;
                if c == '#' || c == '!' {
                    is_comment = true;
                    continue;
                }
            }

            if c != '\n' && c != '\r' {
                if !is_comment {
                    buf.push(c);
                    preceding_backslash = c == '\\' && !preceding_backslash;
                }
                continue;
            }

            self.line += 1;
            self.skip_lf = c == '\r';

            if is_comment || buf.is_empty() {
                is_comment = false;
                new_line = true;
                skip_whitespace = true;
                buf.clear();
                continue;
            }

            if preceding_backslash {
                buf.pop();
                skip_whitespace = true;
                continued = true;
                preceding_backslash = false;
                continue;
            }

            return Some(LogicalLine { text: buf, line: start_line });
        }
    }
}

/// Split a logical line into its still-escaped key and value
fn split_entry(chars: &[char]) -> (&[char], &[char]) {
    let limit = chars.len();
    let mut key_len = 0;
    let mut value_start = limit;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    while key_len < limit {
        let c = chars[key_len];
        if (c == '=' || c == ':') && !preceding_backslash {
            value_start = key_len + 1;
            has_separator = true;
            break;
        } else if is_whitespace(c) && !preceding_backslash {
            value_start = key_len + 1;
            break;
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
        key_len += 1;
    }

    while value_start < limit {
        let c = chars[value_start];
        if !is_whitespace(c) {
            if !has_separator && (c == '=' || c == ':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    (&chars[..key_len], &chars[value_start..])
}

/// Decode backslash escapes in a key or value
fn unescape(chars: &[char], line: usize) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut buf = [0u16; 2];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if c != '\\' {
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }

        let Some(&escaped) = chars.get(i) else {
            break;
        };
        i += 1;

        let decoded = match escaped {
            'u' => {
                let unit = chars
                    .get(i..i + 4)
                    .and_then(|digits| {
                        digits.iter().try_fold(0u16, |acc, d| {
                            d.to_digit(16).map(|v| (acc << 4) | v as u16)
                        })
                    })
                    .ok_or_else(|| PropsError::Format {
                        line,
                        message: "Malformed \\uxxxx encoding".to_string(),
                    })?;
                i += 4;
                units.push(unit);
                continue;
            }
            't' => '\t',
            'r' => '\r',
            'n' => '\n',
            'f' => '\x0c',
            other => other,
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    Ok(String::from_utf16_lossy(&units))
}

/// Load a properties document into `store`.
///
/// Returns the number of assignments applied.
pub fn load_str(store: &mut PropertyStore, text: &str) -> Result<usize> {
    let mut count = 0;
    for logical in LineReader::new(text) {
        let chars: Vec<char> = logical.text.chars().collect();
        let (raw_key, raw_value) = split_entry(&chars);
        let key = unescape(raw_key, logical.line)?;
        let value = unescape(raw_value, logical.line)?;
        trace!(line = logical.line, key = %key, "property loaded");
        store.set(key, value);
        count += 1;
    }
    Ok(count)
}

/// Decode raw document bytes.
///
/// UTF-8 is tried first; bytes that are not valid UTF-8 are read as Latin-1,
/// the traditional `.properties` encoding, so decoding never fails.
pub fn decode(bytes: &[u8]) -> String {
    let (text, _, malformed) = UTF_8.decode(bytes);
    if !malformed {
        return text.into_owned();
    }
    debug!("input is not valid UTF-8, decoding as Latin-1");
    WINDOWS_1252.decode(bytes).0.into_owned()
}

/// Read a properties document from `reader` into `store`
pub fn load<R: Read>(store: &mut PropertyStore, mut reader: R) -> Result<usize> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_str(store, &decode(&bytes))
}

/// Parse a properties document into a fresh store
pub fn parse(text: &str) -> Result<PropertyStore> {
    let mut store = PropertyStore::new();
    load_str(&mut store, text)?;
    Ok(store)
}
