use validator::ValidationErrors;

/// Joins field validation errors into a single readable message
pub fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let msg = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            (field, msg)
        })
        .collect();

    fields.sort();
    fields
        .into_iter()
        .map(|(_, msg)| msg)
        .collect::<Vec<String>>()
        .join(", ")
}
