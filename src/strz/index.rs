//! Position normalization shared by `sub` and `sub0`.
//!
//! Both flavors index *characters* (Unicode scalar values), never bytes or
//! graphemes, and both clamp out-of-range positions instead of failing: an
//! unsatisfiable range is the empty string, not an error.
//!
//! `sub` speaks 1-based inclusive positions where negative values count from
//! the end (`-1` is the last character). `sub0` speaks a 0-based offset plus
//! an optional forward length, with negative offsets counting from the end.

/// Resolves a 1-based inclusive `(start, end)` pair against a string of
/// `len` characters into a 0-based half-open character range.
///
/// Returns `None` when the resolved range is empty or lies entirely outside
/// the string: start above end, end before the first character, or start
/// past the last. Bounds that merely overshoot are clamped to the string.
pub fn one_based_range(start: i64, end: i64, len: usize) -> Option<(usize, usize)> {
    let l = len as i64;
    let resolve = |pos: i64| if pos < 0 { l + pos + 1 } else { pos };

    let start = resolve(start);
    let end = resolve(end);
    if start > end || end < 1 || start > l {
        return None;
    }

    let start = start.max(1) as usize;
    let end = end.min(l) as usize;
    Some((start - 1, end))
}

/// Resolves a 0-based `offset` and optional `length` against a string of
/// `len` characters into a 0-based half-open character range.
///
/// A negative offset means "this many characters from the end", clamped to
/// the start of the string. `length` counts forward from the resolved offset
/// and is truncated at the end of the string; zero or negative lengths
/// resolve to an empty range.
pub fn offset_range(offset: i64, length: Option<i64>, len: usize) -> (usize, usize) {
    let l = len as i64;
    let from = if offset < 0 {
        (l + offset).max(0)
    } else {
        offset.min(l)
    } as usize;

    let to = match length {
        None => len,
        Some(n) if n <= 0 => from,
        Some(n) => ((from as i64).saturating_add(n)).min(l) as usize,
    };

    (from, to.max(from))
}

/// Extracts the characters in the half-open range `[from, to)`.
pub fn char_slice(s: &str, from: usize, to: usize) -> String {
    s.chars().skip(from).take(to.saturating_sub(from)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(s: &str, start: i64, end: i64) -> String {
        match one_based_range(start, end, s.chars().count()) {
            Some((from, to)) => char_slice(s, from, to),
            None => String::new(),
        }
    }

    #[test]
    fn plain_one_based_range() {
        assert_eq!(sub("abcde", 2, 4), "bcd");
        assert_eq!(sub("abcde", 1, 5), "abcde");
        assert_eq!(sub("abcde", 3, 3), "c");
    }

    #[test]
    fn negative_positions_count_from_the_end() {
        assert_eq!(sub("abcde", -3, -1), "cde");
        assert_eq!(sub("abcde", 1, -2), "abcd");
        assert_eq!(sub("abcde", -1, -1), "e");
    }

    #[test]
    fn overshooting_bounds_clamp_to_the_string() {
        assert_eq!(sub("abcde", -100, -3), "abc");
        assert_eq!(sub("abcde", 1, 99), "abcde");
        assert_eq!(sub("abcde", 0, 2), "ab");
    }

    #[test]
    fn unsatisfiable_ranges_are_empty_not_errors() {
        assert_eq!(sub("abcde", -50, -100), "");
        assert_eq!(sub("abcde", 2, -5), "");
        assert_eq!(sub("abcde", 4, 2), "");
        assert_eq!(sub("abcde", 9, 12), "");
        assert_eq!(sub("abcde", -99, -90), "");
    }

    #[test]
    fn empty_string_always_yields_empty() {
        assert_eq!(sub("", 1, -1), "");
        assert_eq!(sub("", -5, 5), "");
    }

    #[test]
    fn range_counts_characters_not_bytes() {
        assert_eq!(sub("héllo", 2, 3), "él");
    }

    fn sub0(s: &str, offset: i64, length: Option<i64>) -> String {
        let (from, to) = offset_range(offset, length, s.chars().count());
        char_slice(s, from, to)
    }

    #[test]
    fn offset_with_default_length_runs_to_the_end() {
        assert_eq!(sub0("abcde", 0, None), "abcde");
        assert_eq!(sub0("abcde", 2, None), "cde");
        assert_eq!(sub0("abcde", 5, None), "");
    }

    #[test]
    fn negative_offset_counts_from_the_end() {
        assert_eq!(sub0("abcde", -2, None), "de");
        assert_eq!(sub0("abcde", -6, Some(2)), "ab");
        assert_eq!(sub0("abcde", -99, None), "abcde");
    }

    #[test]
    fn length_truncates_at_the_string_end() {
        assert_eq!(sub0("abcde", 3, Some(99)), "de");
        assert_eq!(sub0("abcde", 1, Some(2)), "bc");
        assert_eq!(sub0("abcde", 99, Some(2)), "");
    }

    #[test]
    fn zero_or_negative_length_is_empty() {
        assert_eq!(sub0("abcde", 1, Some(0)), "");
        assert_eq!(sub0("abcde", 1, Some(-3)), "");
    }
}
