use crate::error::Result;

// Space, tab, newline, CR only. Not the full Unicode whitespace set.
fn trimmable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Strips leading and trailing whitespace from each operand.
pub fn run(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands
        .iter()
        .map(|s| s.trim_matches(trimmable).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_both_ends_only() {
        let out = run(&ops(&["  a b  ", "\t\nx\r", "y"])).unwrap();
        assert_eq!(out, ["a b", "x", "y"]);
    }

    #[test]
    fn all_whitespace_becomes_empty() {
        let out = run(&ops(&[" \t\r\n "])).unwrap();
        assert_eq!(out, [""]);
    }

    #[test]
    fn unicode_whitespace_is_left_alone() {
        let out = run(&ops(&["\u{a0}a\u{a0}"])).unwrap();
        assert_eq!(out, ["\u{a0}a\u{a0}"]);
    }
}
