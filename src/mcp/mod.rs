use crate::profiles::ProfileStore;
use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions(store: &ProfileStore) -> Vec<serde_json::Value> {
    let ids: Vec<&str> = store.list_ids().collect();
    vec![
        json!({
            "name": contracts::TOOL_ENHANCE_PROMPT,
            "description": "Enhance an image generation prompt with microscopy aesthetic vocabulary.",
            "inputSchema": contracts::enhance_prompt_schema(&ids)
        }),
        json!({
            "name": contracts::TOOL_LIST_TYPES,
            "description": "List available microscopy types with brief descriptions.",
            "inputSchema": contracts::list_types_schema()
        }),
        json!({
            "name": contracts::TOOL_GET_PROFILE,
            "description": "Get the complete aesthetic vocabulary for one microscopy type.",
            "inputSchema": contracts::get_profile_schema(&ids)
        }),
        json!({
            "name": contracts::TOOL_SUGGEST_TYPE,
            "description": "Suggest matching microscopy types from a natural language description.",
            "inputSchema": contracts::suggest_type_schema()
        }),
    ]
}
