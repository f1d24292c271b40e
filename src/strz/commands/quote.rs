//! Shell-safe quoting and unquoting.
//!
//! `escape` produces a word that a POSIX shell parses back to the original
//! string: bare when every character is shell-safe, otherwise wrapped in
//! single quotes with embedded `'` rendered as `'\''`. `unescape` decodes
//! single quotes, double quotes, and backslash escapes; it is best-effort
//! and never fails, so an unterminated quote just runs to the end of the
//! operand.

use crate::error::Result;

fn shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '@' | '%' | '+' | '=' | ',')
}

pub fn escape(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands.iter().map(|s| escape_str(s)).collect())
}

pub fn unescape(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands.iter().map(|s| unescape_str(s)).collect())
}

fn escape_str(s: &str) -> String {
    if !s.is_empty() && s.chars().all(shell_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn unescape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                // Single quotes: everything literal until the closing quote.
                for c in chars.by_ref() {
                    if c == '\'' {
                        break;
                    }
                    out.push(c);
                }
            }
            '"' => {
                // Double quotes: backslash escapes a few characters.
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' => match chars.next() {
                            Some(e @ ('"' | '\\' | '$' | '`')) => out.push(e),
                            Some(e) => {
                                out.push('\\');
                                out.push(e);
                            }
                            None => out.push('\\'),
                        },
                        _ => out.push(c),
                    }
                }
            }
            '\\' => {
                if let Some(e) = chars.next() {
                    out.push(e);
                }
            }
            _ => out.push(c),
        }
    }

    out
}
