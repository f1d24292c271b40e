//! Operand collection: merging explicit command-line operands with lines
//! piped on standard input.
//!
//! Piped lines are always *appended* after the explicit operands, so
//! `printf "c\n" | strz length a b` behaves like `strz length a b c`. When
//! stdin is a terminal it is never touched, and an interactive invocation
//! uses exactly the explicit operands.

use crate::error::{Result, StrzError};
use std::io::{IsTerminal, Read};

/// Produces the effective operand list for one invocation.
///
/// Reads stdin to end when it is not a terminal and appends each line as one
/// operand. Fails with [`StrzError::NoOperands`] if the merged list is empty;
/// every command requires at least one operand.
pub fn gather(explicit: Vec<String>) -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let merged = if stdin.is_terminal() {
        explicit
    } else {
        let mut piped = String::new();
        stdin.lock().read_to_string(&mut piped)?;
        merge_piped(explicit, &piped)
    };

    if merged.is_empty() {
        return Err(StrzError::NoOperands);
    }
    Ok(merged)
}

/// Appends one operand per line of piped input, terminators stripped.
pub fn merge_piped(mut operands: Vec<String>, piped: &str) -> Vec<String> {
    operands.extend(piped.lines().map(str::to_string));
    operands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piped_lines_append_after_explicit_operands() {
        let merged = merge_piped(vec!["a".into(), "b".into()], "c\nd\n");
        assert_eq!(merged, ["a", "b", "c", "d"]);
    }

    #[test]
    fn piped_lines_alone_become_the_operand_list() {
        let merged = merge_piped(Vec::new(), "a\nbb\nccc\n");
        assert_eq!(merged, ["a", "bb", "ccc"]);
    }

    #[test]
    fn line_terminators_are_stripped_including_crlf() {
        let merged = merge_piped(Vec::new(), "a\r\nb\n");
        assert_eq!(merged, ["a", "b"]);
    }

    #[test]
    fn missing_final_newline_still_yields_a_last_operand() {
        let merged = merge_piped(Vec::new(), "a\nb");
        assert_eq!(merged, ["a", "b"]);
    }

    #[test]
    fn empty_pipe_contributes_nothing() {
        let merged = merge_piped(vec!["x".into()], "");
        assert_eq!(merged, ["x"]);
    }

    #[test]
    fn interior_empty_lines_are_kept_as_empty_operands() {
        let merged = merge_piped(Vec::new(), "a\n\nb\n");
        assert_eq!(merged, ["a", "", "b"]);
    }
}
