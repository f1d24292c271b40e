use crate::error::Result;
use crate::index::{char_slice, offset_range, one_based_range};

/// Extracts the 1-based inclusive range `[start, end]` from each operand.
/// Negative positions count from the end (`-1` is the last character);
/// out-of-range bounds clamp and unsatisfiable ranges yield empty strings.
pub fn run(start: i64, end: i64, operands: &[String]) -> Result<Vec<String>> {
    Ok(operands
        .iter()
        .map(|s| match one_based_range(start, end, s.chars().count()) {
            Some((from, to)) => char_slice(s, from, to),
            None => String::new(),
        })
        .collect())
}

/// Extracts up to `length` characters starting at the 0-based `offset` from
/// each operand. A negative offset counts from the end; no `length` means
/// the remainder of the string.
pub fn run_offset(offset: i64, length: Option<i64>, operands: &[String]) -> Result<Vec<String>> {
    Ok(operands
        .iter()
        .map(|s| {
            let (from, to) = offset_range(offset, length, s.chars().count());
            char_slice(s, from, to)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_cover_the_whole_string() {
        assert_eq!(run(1, -1, &ops(&["abcde", "x"])).unwrap(), ["abcde", "x"]);
        assert_eq!(run_offset(0, None, &ops(&["abcde"])).unwrap(), ["abcde"]);
    }

    #[test]
    fn clamped_range_per_operand() {
        assert_eq!(run(-100, -3, &ops(&["abcde"])).unwrap(), ["abc"]);
        assert_eq!(run(-50, -100, &ops(&["abcde"])).unwrap(), [""]);
        assert_eq!(run(2, -5, &ops(&["abcde"])).unwrap(), [""]);
    }

    #[test]
    fn each_operand_resolves_against_its_own_length() {
        assert_eq!(run(-2, -1, &ops(&["abcde", "xy", "q"])).unwrap(), ["de", "xy", "q"]);
    }

    #[test]
    fn offset_flavor_clamps_instead_of_failing() {
        assert_eq!(run_offset(-6, Some(2), &ops(&["abcde"])).unwrap(), ["ab"]);
        assert_eq!(run_offset(99, Some(2), &ops(&["abcde"])).unwrap(), [""]);
        assert_eq!(run_offset(3, Some(99), &ops(&["abcde"])).unwrap(), ["de"]);
    }
}
