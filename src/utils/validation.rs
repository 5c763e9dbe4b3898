use crate::utils::error::{AppError, AppResult};

// Required-field check shared by the create/update paths.
pub fn require_field(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_values() {
        assert!(require_field("", "name").is_err());
        assert!(require_field("   ", "name").is_err());
        assert!(require_field("TK101", "code").is_ok());
    }
}
