//! Request validation for product write payloads.

use crate::error::{AppError, FieldError};
use crate::model::ProductDraft;

/// Maximum length of `name`, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Validate a create payload. Both fields must be present; all failing fields
/// are reported together.
pub fn validate_create(draft: &ProductDraft) -> Result<(), AppError> {
    let mut errors = Vec::new();
    match draft.name.as_deref() {
        // The empty string counts as missing, not as a zero-length name.
        None | Some("") => errors.push(FieldError::new("name", "name is required")),
        Some(name) => check_name(name, &mut errors),
    }
    if draft.price.is_none() {
        errors.push(FieldError::new("price", "price is required"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Validate an update payload. Only the fields present are checked; presence
/// is not required for partial updates.
pub fn validate_update(draft: &ProductDraft) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(name) = &draft.name {
        check_name(name, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    if name.chars().count() > NAME_MAX_LEN {
        errors.push(FieldError::new(
            "name",
            format!("name must be at most {} characters", NAME_MAX_LEN),
        ));
    }
}
