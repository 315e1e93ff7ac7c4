use crate::input::{arguments, required_str};
use crate::profiles::ProfileStore;
use crate::tools::{error_result, json_result, unknown_modality_result};
use serde_json::Value;

pub fn call(store: &ProfileStore, args: &Value) -> Value {
    let requested = match arguments(args).and_then(|obj| required_str(obj, "microscopy_type")) {
        Ok(requested) => requested,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let profile = match store.lookup(requested) {
        Ok(profile) => profile,
        Err(err) => return unknown_modality_result(&err),
    };

    match serde_json::to_value(profile) {
        Ok(value) => json_result(value.clone(), &value),
        Err(err) => error_result(
            crate::mcp::errors::INTERNAL_ERROR,
            err.to_string(),
            Some(requested),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_profile_round_trips() {
        let store = ProfileStore::builtin();
        for id in store.list_ids() {
            let result = call(store, &json!({"microscopy_type": id}));
            assert_eq!(result["isError"], json!(false), "{id}");
            let text = result
                .pointer("/content/0/text")
                .and_then(|value| value.as_str())
                .expect("text");
            let parsed: Value = serde_json::from_str(text).expect("json");
            assert_eq!(parsed["id"], json!(id));
            assert!(parsed["display_name"].is_string());
            for category in [
                "structure",
                "material",
                "color",
                "texture",
                "composition",
                "style",
                "quality",
                "mood",
                "examples",
            ] {
                let phrases = parsed[category].as_array().expect("category array");
                assert!(!phrases.is_empty(), "{id}.{category}");
            }
            let palette = parsed["color_palette"].as_object().expect("palette");
            let mut palette_keys: Vec<&str> = palette.keys().map(String::as_str).collect();
            palette_keys.sort_unstable();
            assert_eq!(palette_keys, ["artistic", "monochrome", "scientific"]);
            let feel = parsed["magnification_feel"].as_object().expect("feel");
            let mut feel_keys: Vec<&str> = feel.keys().map(String::as_str).collect();
            feel_keys.sort_unstable();
            assert_eq!(feel_keys, ["high", "low", "medium"]);
            assert_eq!(result["structuredContent"], parsed);
        }
    }

    #[test]
    fn spaced_name_resolves() {
        let result = call(ProfileStore::builtin(), &json!({"microscopy_type": "Phase Contrast"}));
        assert_eq!(result["structuredContent"]["id"], json!("phase_contrast"));
    }

    #[test]
    fn unknown_profile_is_error_text() {
        let result = call(ProfileStore::builtin(), &json!({"microscopy_type": "x-ray"}));
        assert_eq!(result["isError"], json!(true));
        let text = result["content"][0]["text"].as_str().expect("text");
        assert!(text.starts_with("Error: Unknown microscopy type 'x-ray'"));
    }
}
