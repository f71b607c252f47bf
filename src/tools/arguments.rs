//! Typed access to tool call arguments.

use crate::error::{QuestlineError, Result};

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| QuestlineError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Get a boolean argument.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.value
            .get(key)
            .and_then(|v| v.as_bool())
            .ok_or_else(|| {
                QuestlineError::InvalidArgument(format!("Missing boolean argument: {key}"))
            })
    }

    /// Get an integer argument, falling back to `default` when absent.
    pub fn get_usize_or(&self, key: &str, default: usize) -> Result<usize> {
        match self.value.get(key) {
            None | Some(serde_json::Value::Null) => Ok(default),
            Some(v) => v
                .as_u64()
                .map(|n| n as usize)
                .ok_or_else(|| {
                    QuestlineError::InvalidArgument(format!(
                        "Argument {key} must be a non-negative integer"
                    ))
                }),
        }
    }

    /// Get a list of strings. Non-string elements are rejected.
    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>> {
        let items = self
            .value
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                QuestlineError::InvalidArgument(format!("Missing array argument: {key}"))
            })?;

        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    QuestlineError::InvalidArgument(format!(
                        "Argument {key} must contain only strings"
                    ))
                })
            })
            .collect()
    }

    /// Get a nested object.
    pub fn get_object(&self, key: &str) -> Result<&serde_json::Value> {
        self.value
            .get(key)
            .filter(|v| v.is_object())
            .ok_or_else(|| QuestlineError::InvalidArgument(format!("Missing object argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    ///
    /// Accepts either a JSON object or a JSON-encoded string (some runtimes
    /// deliver arguments pre-serialized).
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        let value = match &self.value {
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str::<serde_json::Value>(trimmed).map_err(|e| {
                        QuestlineError::InvalidArgument(format!(
                            "Failed to deserialize arguments: {e}"
                        ))
                    })?
                }
            }
            other => other.clone(),
        };
        serde_json::from_value(value).map_err(|e| {
            QuestlineError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_str_and_missing_key() {
        let args = ToolArguments::new(json!({"name": "Ada"}));
        assert_eq!(args.get_str("name").unwrap(), "Ada");
        assert!(args.get_str("missing").is_err());
    }

    #[test]
    fn get_string_list_rejects_mixed_elements() {
        let args = ToolArguments::new(json!({"skills": ["rust", 7]}));
        assert!(args.get_string_list("skills").is_err());

        let args = ToolArguments::new(json!({"skills": ["rust", "sql"]}));
        assert_eq!(args.get_string_list("skills").unwrap(), vec!["rust", "sql"]);
    }

    #[test]
    fn get_usize_or_defaults_when_absent_or_null() {
        let args = ToolArguments::new(json!({"limit": null}));
        assert_eq!(args.get_usize_or("limit", 5).unwrap(), 5);
        assert_eq!(args.get_usize_or("other", 3).unwrap(), 3);

        let args = ToolArguments::new(json!({"limit": 10}));
        assert_eq!(args.get_usize_or("limit", 5).unwrap(), 10);
    }

    #[test]
    fn deserialize_accepts_encoded_string_arguments() {
        #[derive(serde::Deserialize)]
        struct Params {
            role: Option<String>,
        }

        let args = ToolArguments::new(json!(r#"{"role": "CTO"}"#));
        let params: Params = args.deserialize().unwrap();
        assert_eq!(params.role.as_deref(), Some("CTO"));
    }
}
