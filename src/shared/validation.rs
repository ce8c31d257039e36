//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldError};

/// Convert request validation errors to AppError.
///
/// Field errors are ordered by field name so the response is stable.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    fields.sort_by(|a, b| (&a.field, &a.message).cmp(&(&b.field, &b.message)));

    if fields.is_empty() {
        return AppError::Validation("Validation failed".into());
    }

    AppError::InvalidFields(fields)
}
