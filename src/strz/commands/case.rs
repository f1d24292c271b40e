use crate::error::Result;

pub fn upper(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands.iter().map(|s| s.to_uppercase()).collect())
}

pub fn lower(operands: &[String]) -> Result<Vec<String>> {
    Ok(operands.iter().map(|s| s.to_lowercase()).collect())
}
