use crate::server::error::AppError;

/// Rejects blank values for a required string field.
///
/// # Arguments
/// - `field` - Wire name of the field, used in the error message
/// - `value` - The submitted value
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(AppError::BadRequest)` - The value is empty or whitespace only
pub fn require_non_empty(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(value)
}
