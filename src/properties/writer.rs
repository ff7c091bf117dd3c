//! Properties document serialization
//!
//! Output is plain ASCII apart from comment characters in U+0080..U+00FF:
//! anything outside the printable ASCII range in keys and values is written
//! as `\uXXXX` so the document survives any reader.

use std::io::{self, Write};

use super::store::PropertyStore;

/// Escape a key (`is_key`) or a value for output
pub fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut units = [0u16; 2];

    for (i, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' => {
                if i == 0 || is_key {
                    out.push('\\');
                }
                out.push(' ');
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }

    out
}

/// Write `comments` as `#` lines.
///
/// Line breaks inside the comment start a new comment line; the `#` is not
/// repeated when the next line already starts with `#` or `!`.
pub fn write_comments<W: Write>(writer: &mut W, comments: &str) -> io::Result<()> {
    let mut out = String::from("#");
    let mut units = [0u16; 2];
    let mut chars = comments.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
                if !matches!(chars.peek(), Some('#') | Some('!')) {
                    out.push('#');
                }
            }
            c if (c as u32) > 0xff => {
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
            c => out.push(c),
        }
    }

    out.push('\n');
    writer.write_all(out.as_bytes())
}

/// Current local time in the layout used for the timestamp comment
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%a %b %d %H:%M:%S %:z %Y")
        .to_string()
}

/// Write `store` as a properties document.
///
/// `comments` and `timestamp` become leading comment lines when present.
pub fn store<W: Write>(
    store: &PropertyStore,
    writer: &mut W,
    comments: Option<&str>,
    timestamp: Option<&str>,
) -> io::Result<()> {
    if let Some(comments) = comments {
        write_comments(writer, comments)?;
    }
    if let Some(timestamp) = timestamp {
        writeln!(writer, "#{}", timestamp)?;
    }
    for (key, value) in store.iter() {
        writeln!(writer, "{}={}", escape(key, true), escape(value, false))?;
    }
    Ok(())
}
