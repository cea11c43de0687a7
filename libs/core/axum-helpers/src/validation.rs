//! Field rules shared by the domain models, for use with
//! `#[validate(custom(function = "not_blank"))]`.

use validator::ValidationError;

/// Reject empty or whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
