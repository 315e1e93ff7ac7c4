use crate::composer::{EnhancementRequest, enhance};
use crate::input::load_enhance_args;
use crate::mcp::errors;
use crate::profiles::ProfileStore;
use crate::tools::{error_result, success_result, unknown_modality_result};
use serde_json::{Value, json};

pub fn call(store: &ProfileStore, args: &Value) -> Value {
    let args = match load_enhance_args(args) {
        Ok(args) => args,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let request = EnhancementRequest {
        base_prompt: &args.base_prompt,
        modality: &args.microscopy_type,
        magnification: args.magnification,
        palette: args.color_palette,
        strength: args.aesthetic_strength,
    };

    let enhanced = match enhance(store, &request) {
        Ok(enhanced) => enhanced,
        Err(err) => return unknown_modality_result(&err),
    };

    let mut structured = match serde_json::to_value(&enhanced) {
        Ok(value) => value,
        Err(err) => return error_result(errors::INTERNAL_ERROR, err.to_string(), None),
    };
    if let Some(obj) = structured.as_object_mut() {
        obj.insert(
            "magnification".to_string(),
            json!(args.magnification.as_str()),
        );
        obj.insert(
            "color_palette".to_string(),
            json!(args.color_palette.as_str()),
        );
        obj.insert(
            "aesthetic_strength".to_string(),
            json!(args.aesthetic_strength.as_str()),
        );
    }

    success_result(enhanced.text, structured)
}
