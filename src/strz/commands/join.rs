use crate::error::Result;

/// Joins all operands with the separator into a single output line.
pub fn run(separator: &str, operands: &[String]) -> Result<Vec<String>> {
    Ok(vec![operands.join(separator)])
}

/// Joins all operands with NUL separators, trailing NUL included.
pub fn run_null(operands: &[String]) -> Result<Vec<String>> {
    let mut joined = operands.join("\0");
    joined.push('\0');
    Ok(vec![joined])
}
