use validator::ValidationErrors;

/// Flattens validator output into `field: message` lines, ordered by field name.
pub fn validation_error_details(errors: &ValidationErrors) -> Vec<String> {
    let mut field_errors: Vec<_> = errors.field_errors().into_iter().collect();
    field_errors.sort_by(|a, b| a.0.cmp(&b.0));

    let mut details = Vec::new();

    for (field, errs) in field_errors {
        for err in errs {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "required" => "required".to_string(),
                    "custom" => "custom validation failed".to_string(),
                    _ => "invalid value".to_string(),
                });

            details.push(format!("{field}: {message}"));
        }
    }

    if details.is_empty() {
        details.push("Validation failed".to_string());
    }

    details
}
