//! Helpers for logging raw player input on a single line.

use std::fmt::Write;

/// Longest escaped preview; vocabulary words and directions are far shorter.
const MAX_PREVIEW: usize = 64;

/// Escape a string for single-line logging:
/// - `\n` => `\\n`
/// - `\r` => `\\r`
/// - `\t` => `\\t`
/// - backslash => `\\\\`
/// - other control characters => `\\xNN`
///
/// Input longer than `MAX_PREVIEW` characters is cut with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// The part of an input line the parser acts on: the first two words, escaped.
/// Trailing words are counted rather than echoed.
pub fn input_preview(line: &str) -> String {
    let mut words = line.split_whitespace();
    let head: Vec<&str> = words.by_ref().take(2).collect();
    let ignored = words.count();

    let mut out = if head.is_empty() {
        "<blank>".to_string()
    } else {
        escape_log(&head.join(" "))
    };
    if ignored > 0 {
        let _ = write!(out, " (+{} ignored)", ignored);
    }
    out
}
