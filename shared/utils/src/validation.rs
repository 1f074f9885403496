use crate::error::{AcademeError, AcademeResult};
use academe_models::{SubjectCategory, SubjectRecord};
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> AcademeResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(AcademeError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.code {
                std::borrow::Cow::Borrowed("length") => {
                    format!("Length validation failed for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("range") => {
                    format!("Value out of range for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("invalid_course_code") => {
                    format!("Field '{}' is not a valid course code", field)
                }
                _ => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

pub fn validate_subject_code(code: &str) -> AcademeResult<String> {
    let normalized = SubjectRecord::normalize_code(code);
    if !SubjectRecord::is_valid_code(&normalized) {
        return Err(AcademeError::validation(
            "subject_code",
            format!("'{}' does not match the course code grammar", code),
        ));
    }
    Ok(normalized)
}

pub fn validate_file_type(file_name: &str, allowed_types: &[&str]) -> AcademeResult<()> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !allowed_types.contains(&extension.to_lowercase().as_str()) {
        return Err(AcademeError::validation(
            "file_type",
            format!(
                "File type '{}' not allowed. Allowed types: {}",
                extension,
                allowed_types.join(", ")
            ),
        ));
    }

    Ok(())
}

/// Upload size ceiling. Callers must reject oversized documents before
/// handing bytes to the extraction core.
pub fn validate_file_size(file_size: u64, max_size: u64) -> AcademeResult<()> {
    if file_size > max_size {
        return Err(AcademeError::payload_too_large(format!(
            "File size {} bytes exceeds maximum allowed size {} bytes",
            file_size, max_size
        )));
    }

    Ok(())
}

/// Scored marks must not exceed the scheme maxima for the subject category.
pub fn validate_scored_marks(
    cie_scored: Option<f64>,
    see_scored: Option<f64>,
    category: SubjectCategory,
) -> AcademeResult<()> {
    let mut errors = Vec::new();

    if let Some(cie) = cie_scored {
        if cie > category.cie_max() {
            errors.push(format!(
                "CIE scored ({}) exceeds CIE max ({}) for category '{}'",
                cie,
                category.cie_max(),
                category.label()
            ));
        }
    }
    if let Some(see) = see_scored {
        if see > category.see_max() {
            errors.push(format!(
                "SEE scored ({}) exceeds SEE max ({}) for category '{}'",
                see,
                category.see_max(),
                category.label()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AcademeError::validation("marks", errors.join("; ")))
    }
}
