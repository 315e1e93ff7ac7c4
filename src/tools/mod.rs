use crate::mcp::errors;
use crate::profiles::UnknownModality;
use serde_json::{Value, json};

pub mod enhance_prompt;
pub mod get_profile;
pub mod list_types;
pub mod suggest_type;

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

/// Lookup misses still answer with text: the message names every valid id.
pub fn unknown_modality_result(err: &UnknownModality) -> serde_json::Value {
    log::info!("unknown microscopy type requested: {}", err.requested);
    let mut result = error_result(errors::UNKNOWN_MODALITY, err.to_string(), None);
    if let Some(error) = result.pointer_mut("/structuredContent/error")
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("requested".to_string(), json!(err.requested));
        obj.insert("available".to_string(), json!(err.available));
    }
    result
}

pub fn success_result(text: impl Into<String>, structured: Value) -> serde_json::Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "structuredContent": structured,
        "isError": false
    })
}

/// JSON tools answer with the pretty-printed document as their text.
pub fn json_result(structured: Value, text_value: &Value) -> serde_json::Value {
    match serde_json::to_string_pretty(text_value) {
        Ok(text) => success_result(text, structured),
        Err(err) => error_result(errors::INTERNAL_ERROR, err.to_string(), None),
    }
}
