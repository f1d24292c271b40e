use crate::error::Result;

/// Emits the character count of each operand, one decimal number per line.
pub fn run(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands
        .iter()
        .map(|s| s.chars().count().to_string())
        .collect())
}
