//! The padding engine.
//!
//! When no width is given the target width is the maximum character length
//! across *all* operands, computed before any padding: one shared width, so
//! the longest operand passes through unchanged and the rest line up with
//! it. The fill unit may be longer than one character; it is repeated
//! left-to-right and truncated to land on the exact width.

use crate::error::{Result, StrzError};

#[derive(Debug, Clone)]
pub struct PadOptions {
    /// Fill unit, repeated as needed. Must be non-empty.
    pub fill: String,
    /// Target width in characters; 0 means "derive from the operands".
    pub width: usize,
    /// Fill after the operand instead of before it.
    pub right: bool,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            fill: " ".to_string(),
            width: 0,
            right: false,
        }
    }
}

pub fn run(operands: &[String], opts: &PadOptions) -> Result<Vec<String>> {
    if opts.fill.is_empty() {
        return Err(StrzError::Usage("pad: fill string must not be empty".into()));
    }

    let width = if opts.width == 0 {
        operands.iter().map(|s| s.chars().count()).max().unwrap_or(0)
    } else {
        opts.width
    };

    Ok(operands
        .iter()
        .map(|s| pad_one(s, width, &opts.fill, opts.right))
        .collect())
}

fn pad_one(s: &str, width: usize, fill: &str, right: bool) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let padding: String = fill.chars().cycle().take(width - len).collect();
    if right {
        format!("{s}{padding}")
    } else {
        format!("{padding}{s}")
    }
}
