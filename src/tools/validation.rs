//! Validate tool call arguments against their declared schema before
//! execution.

/// Validate tool arguments against a JSON Schema.
///
/// Checks the top-level shape, required field presence, property types, and
/// element types of string arrays. Returns `Ok(())` when valid, `Err(message)`
/// describing the first violation found.
pub fn validate_arguments(
    args: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), String> {
    if schema.get("type").and_then(|v| v.as_str()) == Some("object") && !args.is_object() {
        return Err(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        ));
    }

    let obj = match args.as_object() {
        Some(obj) => obj,
        None => return Ok(()),
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !obj.contains_key(field) {
                return Err(format!("missing required field '{field}'"));
            }
        }
    }

    let properties = match schema.get("properties").and_then(|v| v.as_object()) {
        Some(props) => props,
        None => return Ok(()),
    };

    for (key, value) in obj {
        let prop_schema = match properties.get(key) {
            Some(schema) => schema,
            None => continue, // extra fields tolerated
        };
        check_property(key, value, prop_schema)?;
    }

    Ok(())
}

fn check_property(
    key: &str,
    value: &serde_json::Value,
    prop_schema: &serde_json::Value,
) -> Result<(), String> {
    // Optional fields may arrive as explicit nulls.
    if value.is_null() {
        return Ok(());
    }

    if let Some(expected) = prop_schema.get("type").and_then(|v| v.as_str()) {
        if !value_matches_type(value, expected) {
            return Err(format!(
                "field '{}' expected type '{}', got {}",
                key,
                expected,
                json_type_name(value)
            ));
        }
    }

    if let (Some(items), Some(elements)) = (prop_schema.get("items"), value.as_array()) {
        if let Some(item_type) = items.get("type").and_then(|v| v.as_str()) {
            for (idx, element) in elements.iter().enumerate() {
                if !value_matches_type(element, item_type) {
                    return Err(format!(
                        "field '{key}[{idx}]' expected type '{item_type}', got {}",
                        json_type_name(element)
                    ));
                }
            }
        }
    }

    if let Some(allowed) = prop_schema.get("enum").and_then(|v| v.as_array()) {
        if !allowed.contains(value) {
            return Err(format!("field '{key}' is not one of the allowed values"));
        }
    }

    Ok(())
}

fn value_matches_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
