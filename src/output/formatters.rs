//! Formatting utilities for terminal output

/// Escape control characters so user-supplied text cannot drive the terminal
///
/// Printable characters pass through unchanged; control characters become
/// Rust-style escapes (`\u{1b}`, `\n`, ...).
#[must_use]
pub fn escape_display(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

/// `"1 attempt"`, `"3 attempts"`
#[must_use]
pub fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Quote a string so leading/trailing spaces stay visible
#[must_use]
pub fn quoted(text: &str) -> String {
    format!("'{}'", escape_display(text))
}
