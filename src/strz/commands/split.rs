use crate::error::{Result, StrzError};

/// Splits each operand on the separator, one field per output line.
/// Empty fields are preserved.
pub fn run(separator: &str, operands: &[String]) -> Result<Vec<String>> {
    if separator.is_empty() {
        return Err(StrzError::Usage("split: separator must not be empty".into()));
    }
    Ok(operands
        .iter()
        .flat_map(|s| s.split(separator).map(str::to_string))
        .collect())
}

/// Splits each operand on NUL bytes. Exactly one trailing NUL is stripped
/// first, so NUL-terminated records do not produce a phantom empty field;
/// any further trailing NULs still split as usual.
pub fn run_null(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands
        .iter()
        .flat_map(|s| {
            let s = s.strip_suffix('\0').unwrap_or(s.as_str());
            s.split('\0').map(str::to_string)
        })
        .collect())
}
