use std::collections::HashMap;
use validator::{Validate, ValidationErrors};

/// Flattens validator output into the per-field error map the form UIs render.
/// One message per field: the first failing rule wins, later rules are dropped.
/// Keys are converted to the camelCase names used on the wire.
pub fn flatten_errors(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Campo no válido: {}", field));
            (to_camel_case(field), message)
        })
        .collect()
}

/// Validates and returns the flattened field-error map, empty when the value passes.
pub fn check<T: Validate>(value: &T) -> HashMap<String, String> {
    match value.validate() {
        Ok(()) => HashMap::new(),
        Err(errors) => flatten_errors(&errors),
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
