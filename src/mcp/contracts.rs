use serde_json::json;

pub const TOOL_ENHANCE_PROMPT: &str = "microscopy.enhance_prompt";
pub const TOOL_LIST_TYPES: &str = "microscopy.list_types";
pub const TOOL_GET_PROFILE: &str = "microscopy.get_profile";
pub const TOOL_SUGGEST_TYPE: &str = "microscopy.suggest_type";

pub const PROTOCOL_VERSION: &str = "2025-11-25";

pub fn enhance_prompt_schema(modality_ids: &[&str]) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "base_prompt": {
                "type": "string",
                "description": "The original image description to enhance"
            },
            "microscopy_type": {
                "type": "string",
                "description": format!("Microscopy modality ({})", modality_ids.join(", "))
            },
            "magnification": {
                "type": "string",
                "enum": ["low", "medium", "high"],
                "default": "medium"
            },
            "color_palette": {
                "type": "string",
                "enum": ["scientific", "artistic", "monochrome"],
                "default": "scientific"
            },
            "aesthetic_strength": {
                "type": "string",
                "enum": ["subtle", "balanced", "strong"],
                "default": "balanced"
            }
        },
        "required": ["base_prompt", "microscopy_type"],
        "additionalProperties": false
    })
}

pub fn list_types_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

pub fn get_profile_schema(modality_ids: &[&str]) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "microscopy_type": {
                "type": "string",
                "description": format!("Microscopy modality ({})", modality_ids.join(", "))
            }
        },
        "required": ["microscopy_type"],
        "additionalProperties": false
    })
}

pub fn suggest_type_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "description": {
                "type": "string",
                "description": "Natural language description of the desired aesthetic"
            }
        },
        "required": ["description"],
        "additionalProperties": false
    })
}
